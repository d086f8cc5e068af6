//! Display filtering: bucket mode plus first-letter restriction.

use std::fmt;
use std::str::FromStr;

use crate::catalog::Catalog;
use crate::record::GameRecord;
use crate::triage::{Bucket, TriageState, TriageStatus};

/// Which triage bucket the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    Accepted,
    Rejected,
    Hold,
    Untagged,
}

impl FilterMode {
    pub const ALL: [FilterMode; 5] = [
        FilterMode::All,
        FilterMode::Accepted,
        FilterMode::Rejected,
        FilterMode::Hold,
        FilterMode::Untagged,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Accepted => "Accepted",
            FilterMode::Rejected => "Rejected",
            FilterMode::Hold => "On Hold",
            FilterMode::Untagged => "No Selection",
        }
    }

    pub fn matches(&self, status: TriageStatus) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Accepted => status == TriageStatus::Tagged(Bucket::Accepted),
            FilterMode::Rejected => status == TriageStatus::Tagged(Bucket::Rejected),
            FilterMode::Hold => status == TriageStatus::Tagged(Bucket::Hold),
            FilterMode::Untagged => status == TriageStatus::Untagged,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "accepted" => Ok(FilterMode::Accepted),
            "rejected" => Ok(FilterMode::Rejected),
            "hold" | "on-hold" | "onhold" => Ok(FilterMode::Hold),
            "untagged" | "none" | "no-selection" => Ok(FilterMode::Untagged),
            other => Err(format!(
                "unknown filter mode '{other}' (expected all, accepted, rejected, hold or untagged)"
            )),
        }
    }
}

/// Restriction on the first character of a game's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterFilter {
    #[default]
    Any,
    /// Names starting with a decimal digit.
    Digit,
    /// Names starting with exactly this character (case-sensitive).
    Letter(char),
}

impl LetterFilter {
    /// The 28 selector choices: All, 0-9, then A through Z.
    pub fn choices() -> Vec<LetterFilter> {
        let mut choices = vec![LetterFilter::Any, LetterFilter::Digit];
        choices.extend(('A'..='Z').map(LetterFilter::Letter));
        choices
    }

    pub fn label(&self) -> String {
        match self {
            LetterFilter::Any => "All".to_string(),
            LetterFilter::Digit => "0-9".to_string(),
            LetterFilter::Letter(c) => c.to_string(),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            LetterFilter::Any => true,
            LetterFilter::Digit => name.chars().next().is_some_and(|c| c.is_ascii_digit()),
            LetterFilter::Letter(letter) => name.starts_with(*letter),
        }
    }
}

impl FromStr for LetterFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (s, chars.next(), chars.next()) {
            ("all" | "All" | "ALL", _, _) => Ok(LetterFilter::Any),
            ("0-9" | "#", _, _) => Ok(LetterFilter::Digit),
            (_, Some(c), None) => Ok(LetterFilter::Letter(c)),
            _ => Err(format!("invalid letter filter '{s}' (expected all, 0-9 or one letter)")),
        }
    }
}

/// Current display predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    pub mode: FilterMode,
    pub letter: LetterFilter,
}

impl FilterState {
    pub fn new(mode: FilterMode, letter: LetterFilter) -> Self {
        Self { mode, letter }
    }

    pub fn matches(&self, record: &GameRecord, triage: &TriageState) -> bool {
        self.letter.matches(record.name()) && self.mode.matches(triage.bucket_of(record))
    }

    /// Catalog indices of records passing both predicates, in catalog order.
    pub fn apply(&self, catalog: &Catalog, triage: &TriageState) -> Vec<usize> {
        catalog
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(record, triage))
            .map(|(i, _)| i)
            .collect()
    }
}

/// How a row in the game list is emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Plain,
    Accepted,
    Rejected,
    Hold,
    /// Untagged record whose name appears more than once.
    DuplicateUntagged,
}

impl RowStyle {
    /// Bucket color wins over duplicate emphasis.
    pub fn of(record: &GameRecord, catalog: &Catalog, triage: &TriageState) -> Self {
        match triage.bucket_of(record) {
            TriageStatus::Tagged(Bucket::Accepted) => RowStyle::Accepted,
            TriageStatus::Tagged(Bucket::Rejected) => RowStyle::Rejected,
            TriageStatus::Tagged(Bucket::Hold) => RowStyle::Hold,
            TriageStatus::Untagged if catalog.is_duplicate(record) => RowStyle::DuplicateUntagged,
            TriageStatus::Untagged => RowStyle::Plain,
        }
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
