//! The plain-text progress file listing each bucket's member paths.
//!
//! ```text
//! Accepted:
//! ./a.zip
//!
//! Rejected:
//! ./b.zip
//!
//! On Hold:
//! ```

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::error::TriageError;
use crate::triage::{Bucket, TriageState};

const ACCEPTED_HEADER: &str = "Accepted:";
const REJECTED_HEADER: &str = "Rejected:";
const HOLD_HEADER: &str = "On Hold:";

/// `<source dir>/<system name>_progress.txt`
pub fn progress_file_path(catalog: &Catalog) -> PathBuf {
    catalog
        .source_dir()
        .join(format!("{}_progress.txt", catalog.system_name()))
}

/// Paths read from a progress file, grouped by section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedProgress {
    pub accepted: Vec<String>,
    pub rejected: Vec<String>,
    pub hold: Vec<String>,
}

impl SavedProgress {
    pub fn paths(&self, bucket: Bucket) -> &[String] {
        match bucket {
            Bucket::Accepted => &self.accepted,
            Bucket::Rejected => &self.rejected,
            Bucket::Hold => &self.hold,
        }
    }

    fn paths_mut(&mut self, bucket: Bucket) -> &mut Vec<String> {
        match bucket {
            Bucket::Accepted => &mut self.accepted,
            Bucket::Rejected => &mut self.rejected,
            Bucket::Hold => &mut self.hold,
        }
    }
}

/// Outcome of applying a progress file to a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreSummary {
    pub restored: usize,
    /// Paths with no matching record in the catalog.
    pub dropped: usize,
}

fn header_bucket(line: &str) -> Option<Bucket> {
    match line {
        ACCEPTED_HEADER => Some(Bucket::Accepted),
        REJECTED_HEADER => Some(Bucket::Rejected),
        HOLD_HEADER => Some(Bucket::Hold),
        _ => None,
    }
}

fn header_for(bucket: Bucket) -> &'static str {
    match bucket {
        Bucket::Accepted => ACCEPTED_HEADER,
        Bucket::Rejected => REJECTED_HEADER,
        Bucket::Hold => HOLD_HEADER,
    }
}

/// Parse progress text. Blank lines and lines before the first header are skipped.
pub fn parse_progress<R: BufRead>(reader: R) -> Result<SavedProgress, TriageError> {
    let mut saved = SavedProgress::default();
    let mut section: Option<Bucket> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if let Some(bucket) = header_bucket(line) {
            section = Some(bucket);
            continue;
        }
        if line.is_empty() {
            continue;
        }
        if let Some(bucket) = section {
            saved.paths_mut(bucket).push(line.to_string());
        }
    }

    Ok(saved)
}

/// Write the three sections for `catalog`'s tagged records, in catalog order.
pub fn write_progress<W: Write>(
    mut out: W,
    catalog: &Catalog,
    triage: &TriageState,
) -> Result<(), TriageError> {
    for (i, bucket) in Bucket::ALL.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", header_for(*bucket))?;
        for record in triage.members(catalog, *bucket) {
            writeln!(out, "{}", record.path())?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Save progress to `path`.
///
/// Fails with [`TriageError::ProgressExists`] when the file exists and
/// `overwrite` is false; the existing file is left untouched.
pub fn save_progress(
    path: &Path,
    catalog: &Catalog,
    triage: &TriageState,
    overwrite: bool,
) -> Result<(), TriageError> {
    if path.exists() && !overwrite {
        return Err(TriageError::ProgressExists(path.to_path_buf()));
    }

    let mut contents = Vec::new();
    write_progress(&mut contents, catalog, triage)?;

    let tmp = path.with_extension("txt.tmp");
    fs::write(&tmp, &contents)?;
    fs::rename(&tmp, path)?;
    log::debug!("Saved progress to {}", path.display());
    Ok(())
}

/// Read the progress file at `path`, or `None` if there is none.
pub fn load_progress(path: &Path) -> Result<Option<SavedProgress>, TriageError> {
    if !path.is_file() {
        return Ok(None);
    }
    let file = fs::File::open(path)?;
    parse_progress(std::io::BufReader::new(file)).map(Some)
}

/// Classify each saved path's first matching record. Unmatched paths are dropped.
///
/// Sections are applied accepted, rejected, then on hold; a path listed under
/// two headers ends up in the later of those.
pub fn restore(saved: &SavedProgress, catalog: &Catalog, triage: &mut TriageState) -> RestoreSummary {
    let mut summary = RestoreSummary::default();
    for bucket in Bucket::ALL {
        for path in saved.paths(bucket) {
            match catalog.find_by_path(path) {
                Some(record) => {
                    triage.classify(record, bucket);
                    summary.restored += 1;
                }
                None => {
                    log::debug!("Dropping saved path not in catalog: {}", path);
                    summary.dropped += 1;
                }
            }
        }
    }
    summary
}

#[cfg(test)]
#[path = "tests/progress_file_tests.rs"]
mod tests;
