//! Accepted / rejected / on-hold classification of catalog records.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::catalog::Catalog;
use crate::record::GameRecord;

/// One of the three triage buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Accepted,
    Rejected,
    Hold,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Accepted, Bucket::Rejected, Bucket::Hold];

    /// Human-readable label used in menus and listings.
    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Accepted => "Accepted",
            Bucket::Rejected => "Rejected",
            Bucket::Hold => "On Hold",
        }
    }

    /// Single-key shortcut bound to this bucket.
    pub fn shortcut(&self) -> char {
        match self {
            Bucket::Accepted => 'a',
            Bucket::Rejected => 'r',
            Bucket::Hold => 'h',
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Bucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "accepted" | "accept" | "a" => Ok(Bucket::Accepted),
            "rejected" | "reject" | "r" => Ok(Bucket::Rejected),
            "hold" | "on-hold" | "onhold" | "h" => Ok(Bucket::Hold),
            other => Err(format!(
                "unknown bucket '{other}' (expected accepted, rejected or hold)"
            )),
        }
    }
}

/// Where a record currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriageStatus {
    Tagged(Bucket),
    Untagged,
}

/// Per-bucket totals for the live counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriageCounts {
    pub total: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub hold: usize,
    pub untagged: usize,
}

/// Classification of records, keyed by their `path`.
///
/// A single map from identifier to bucket makes the buckets disjoint by
/// construction: classifying a record replaces whatever bucket it had.
#[derive(Debug, Clone, Default)]
pub struct TriageState {
    tags: HashMap<String, Bucket>,
}

impl TriageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `record` into `bucket`, removing it from any other bucket.
    pub fn classify(&mut self, record: &GameRecord, bucket: Bucket) {
        self.classify_path(record.path(), bucket);
    }

    pub fn classify_path(&mut self, path: &str, bucket: Bucket) {
        self.tags.insert(path.to_string(), bucket);
    }

    pub fn bucket_of(&self, record: &GameRecord) -> TriageStatus {
        self.status_of_path(record.path())
    }

    pub fn status_of_path(&self, path: &str) -> TriageStatus {
        match self.tags.get(path) {
            Some(&bucket) => TriageStatus::Tagged(bucket),
            None => TriageStatus::Untagged,
        }
    }

    pub fn is_in(&self, record: &GameRecord, bucket: Bucket) -> bool {
        self.tags.get(record.path()) == Some(&bucket)
    }

    /// Records of `catalog` in `bucket`, in catalog order.
    pub fn members<'a>(
        &'a self,
        catalog: &'a Catalog,
        bucket: Bucket,
    ) -> impl Iterator<Item = &'a GameRecord> + 'a {
        catalog
            .records()
            .iter()
            .filter(move |r| self.is_in(r, bucket))
    }

    /// Number of tagged identifiers across all buckets.
    pub fn tagged_len(&self) -> usize {
        self.tags.len()
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn counts(&self, catalog: &Catalog) -> TriageCounts {
        let mut counts = TriageCounts {
            total: catalog.len(),
            ..Default::default()
        };
        for record in catalog.records() {
            match self.bucket_of(record) {
                TriageStatus::Tagged(Bucket::Accepted) => counts.accepted += 1,
                TriageStatus::Tagged(Bucket::Rejected) => counts.rejected += 1,
                TriageStatus::Tagged(Bucket::Hold) => counts.hold += 1,
                TriageStatus::Untagged => counts.untagged += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
#[path = "tests/triage_tests.rs"]
mod tests;
