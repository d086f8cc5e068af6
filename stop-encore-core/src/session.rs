//! A triage session over one loaded catalog.
//!
//! The session owns everything a frontend needs between user actions: the
//! catalog, the triage state, the active filter and the selected row. A new
//! catalog load builds a new session; nothing carries over.

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::error::TriageError;
use crate::export::{self, ExportProgress, ExportSummary};
use crate::filter::{FilterMode, FilterState, LetterFilter, RowStyle};
use crate::progress_file::{self, RestoreSummary};
use crate::record::GameRecord;
use crate::triage::{Bucket, TriageCounts, TriageState, TriageStatus};

pub struct Session {
    catalog: Catalog,
    triage: TriageState,
    filter: FilterState,
    /// Catalog indices passing `filter`, refreshed after every change.
    visible: Vec<usize>,
    /// Position within `visible`.
    selected: usize,
}

impl Session {
    /// Load `<dir>/gamelist.xml` and start with every game untagged.
    pub fn open(dir: &Path) -> Result<Self, TriageError> {
        let catalog = Catalog::load(dir)?;
        log::info!(
            "Loaded {} games for {}",
            catalog.len(),
            catalog.system_name()
        );
        Ok(Self::new(catalog))
    }

    pub fn new(catalog: Catalog) -> Self {
        let mut session = Self {
            catalog,
            triage: TriageState::new(),
            filter: FilterState::default(),
            visible: Vec::new(),
            selected: 0,
        };
        session.refresh();
        session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn triage(&self) -> &TriageState {
        &self.triage
    }

    pub fn filter(&self) -> FilterState {
        self.filter
    }

    /// Catalog indices of the rows currently shown.
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    /// Records of the rows currently shown.
    pub fn visible_records(&self) -> impl Iterator<Item = &GameRecord> {
        self.visible.iter().filter_map(|&i| self.catalog.get(i))
    }

    /// Position of the selected row within [`Session::visible`].
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select row `row`. Out-of-range rows are ignored.
    pub fn select(&mut self, row: usize) -> bool {
        if row < self.visible.len() {
            self.selected = row;
            true
        } else {
            false
        }
    }

    /// The record at the selected row, if the filtered list is not empty.
    pub fn selected_record(&self) -> Option<&GameRecord> {
        self.visible
            .get(self.selected)
            .and_then(|&i| self.catalog.get(i))
    }

    pub fn set_filter_mode(&mut self, mode: FilterMode) {
        self.filter.mode = mode;
        self.refresh();
    }

    pub fn set_letter(&mut self, letter: LetterFilter) {
        self.filter.letter = letter;
        self.refresh();
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.refresh();
    }

    /// Classify the selected record and move to the next row.
    ///
    /// Returns the classified record's path, or `None` if nothing is selected.
    pub fn classify_selected(&mut self, bucket: Bucket) -> Option<String> {
        let path = self.selected_record()?.path().to_string();
        let was_last = self.selected + 1 >= self.visible.len();
        self.triage.classify_path(&path, bucket);
        self.refresh();

        // Under a bucket filter the classified row may have dropped out, in
        // which case the next record has already slid into its place.
        let still_visible = self
            .selected_record()
            .is_some_and(|record| record.path() == path);
        if still_visible && !was_last {
            self.selected += 1;
        }
        self.clamp_selection();
        Some(path)
    }

    /// Classify the first record whose `path` matches.
    pub fn classify_path(&mut self, path: &str, bucket: Bucket) -> Result<(), TriageError> {
        let record = self
            .catalog
            .find_by_path(path)
            .ok_or_else(|| TriageError::not_found(format!("No game with path {path}")))?;
        self.triage.classify(record, bucket);
        self.refresh();
        Ok(())
    }

    pub fn status_of(&self, record: &GameRecord) -> TriageStatus {
        self.triage.bucket_of(record)
    }

    pub fn row_style(&self, record: &GameRecord) -> RowStyle {
        RowStyle::of(record, &self.catalog, &self.triage)
    }

    pub fn counts(&self) -> TriageCounts {
        self.triage.counts(&self.catalog)
    }

    pub fn progress_path(&self) -> PathBuf {
        progress_file::progress_file_path(&self.catalog)
    }

    /// Write the progress file. See [`progress_file::save_progress`].
    pub fn save_progress(&self, overwrite: bool) -> Result<PathBuf, TriageError> {
        let path = self.progress_path();
        progress_file::save_progress(&path, &self.catalog, &self.triage, overwrite)?;
        let counts = self.counts();
        log::info!(
            "Saved progress: {} accepted, {} rejected, {} on hold",
            counts.accepted,
            counts.rejected,
            counts.hold
        );
        Ok(path)
    }

    /// Merge the saved progress file into the current tags.
    ///
    /// Returns `None` when no progress file exists yet.
    pub fn load_progress(&mut self) -> Result<Option<RestoreSummary>, TriageError> {
        let path = self.progress_path();
        let saved = match progress_file::load_progress(&path)? {
            Some(saved) => saved,
            None => return Ok(None),
        };
        let summary = progress_file::restore(&saved, &self.catalog, &mut self.triage);
        self.refresh();
        if summary.dropped > 0 {
            log::warn!(
                "{} saved paths no longer match any game and were dropped",
                summary.dropped
            );
        }
        Ok(Some(summary))
    }

    pub fn export(
        &self,
        dest: &Path,
        progress: &dyn Fn(ExportProgress),
    ) -> Result<ExportSummary, TriageError> {
        export::export_accepted(&self.catalog, &self.triage, dest, progress)
    }

    fn refresh(&mut self) {
        self.visible = self.filter.apply(&self.catalog, &self.triage);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
