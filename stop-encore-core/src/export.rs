//! Export of accepted games: a new gamelist plus every referenced file.

use std::collections::HashSet;
use std::fs;
use std::io::BufWriter;
use std::path::{Component, Path, PathBuf};

use crate::catalog::Catalog;
use crate::error::TriageError;
use crate::gamelist::{self, GAMELIST_FILE_NAME};
use crate::record::GameRecord;
use crate::triage::{Bucket, TriageState};

/// Fields whose value is a media file relative to the source directory.
pub const MEDIA_FIELDS: &[&str] = &[
    "image",
    "video",
    "marquee",
    "thumbnail",
    "manual",
    "rating",
    "fanart",
    "boxart",
];

/// Whether a field's value names a file that should be copied on export.
pub fn is_asset_field(field: &str) -> bool {
    field == "path" || MEDIA_FIELDS.contains(&field)
}

/// Progress information for callbacks.
#[derive(Debug, Clone)]
pub enum ExportProgress {
    /// Export is starting with this many accepted games
    Started { total: usize },
    /// A file is about to be copied
    Copying { file: String },
    /// One game has been fully processed
    Exported {
        done: usize,
        total: usize,
        name: String,
    },
    /// Gamelist written, nothing left to do
    Done,
}

/// Why a referenced asset was not copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing exists at the resolved location
    Missing,
    /// The path points outside the source directory
    OutsideSource,
    /// The path is a directory that contains the export destination
    ContainsDestination,
}

/// An asset reference that was left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedAsset {
    pub game: String,
    pub field: String,
    pub value: String,
    pub reason: SkipReason,
}

/// Summary of an export.
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub games: usize,
    pub files_copied: usize,
    pub skipped: Vec<SkippedAsset>,
    pub gamelist_path: PathBuf,
}

/// Export every accepted game of `catalog` into `dest`.
///
/// Writes `dest/gamelist.xml` and copies each existing asset to the same
/// relative location under `dest`. Missing assets are recorded in the
/// summary and never abort the export.
pub fn export_accepted(
    catalog: &Catalog,
    triage: &TriageState,
    dest: &Path,
    progress: &dyn Fn(ExportProgress),
) -> Result<ExportSummary, TriageError> {
    let accepted: Vec<&GameRecord> = triage.members(catalog, Bucket::Accepted).collect();
    if accepted.is_empty() {
        return Err(TriageError::NothingToExport);
    }

    fs::create_dir_all(dest)?;
    let dest_canonical = dest.canonicalize()?;
    if dest_canonical == catalog.source_dir() {
        return Err(TriageError::DestinationIsSource(dest.to_path_buf()));
    }

    let total = accepted.len();
    progress(ExportProgress::Started { total });

    let mut summary = ExportSummary {
        games: total,
        ..Default::default()
    };
    let mut copied: HashSet<PathBuf> = HashSet::new();

    for (i, game) in accepted.iter().enumerate() {
        for (field, value) in game.fields() {
            if !is_asset_field(field) || value.is_empty() {
                continue;
            }
            if field != "path" && !looks_like_file(value) {
                // e.g. a numeric <rating>
                continue;
            }

            let relative = match relative_to_source(catalog.source_dir(), value) {
                Some(rel) => rel,
                None => {
                    log::warn!(
                        "Not copying {} for {}: outside source directory",
                        value,
                        game.name()
                    );
                    summary
                        .skipped
                        .push(skipped(game, field, value, SkipReason::OutsideSource));
                    continue;
                }
            };
            if copied.contains(&relative) {
                continue;
            }

            let source = catalog.source_dir().join(&relative);
            if !source.exists() {
                log::debug!("Missing {} for {}: {}", field, game.name(), source.display());
                summary.skipped.push(skipped(game, field, value, SkipReason::Missing));
                continue;
            }
            if source.is_dir() && dest_canonical.starts_with(source.canonicalize()?) {
                log::warn!(
                    "Not copying {} for {}: export directory is inside it",
                    value,
                    game.name()
                );
                summary
                    .skipped
                    .push(skipped(game, field, value, SkipReason::ContainsDestination));
                continue;
            }

            progress(ExportProgress::Copying {
                file: value.to_string(),
            });
            summary.files_copied += copy_asset(&source, &dest.join(&relative))?;
            copied.insert(relative);
        }

        progress(ExportProgress::Exported {
            done: i + 1,
            total,
            name: game.name().to_string(),
        });
    }

    let gamelist_path = dest.join(GAMELIST_FILE_NAME);
    let file = fs::File::create(&gamelist_path)?;
    gamelist::write_gamelist(BufWriter::new(file), accepted.iter().copied())?;
    summary.gamelist_path = gamelist_path;

    log::debug!(
        "Exported {} games ({} files, {} skipped) to {}",
        summary.games,
        summary.files_copied,
        summary.skipped.len(),
        dest.display()
    );
    progress(ExportProgress::Done);
    Ok(summary)
}

fn skipped(game: &GameRecord, field: &str, value: &str, reason: SkipReason) -> SkippedAsset {
    SkippedAsset {
        game: game.name().to_string(),
        field: field.to_string(),
        value: value.to_string(),
        reason,
    }
}

/// Whether a media value names a file: it has a directory separator or a
/// non-numeric extension. `0.8` and `5` are plain values.
fn looks_like_file(value: &str) -> bool {
    if value.contains('/') || value.contains('\\') {
        return true;
    }
    Path::new(value)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| !ext.is_empty() && !ext.chars().all(|c| c.is_ascii_digit()))
}

/// Path of `value` relative to `source_root`, or `None` if it escapes the root.
fn relative_to_source(source_root: &Path, value: &str) -> Option<PathBuf> {
    let absolute = source_root.join(value);
    let relative = pathdiff::diff_paths(&absolute, source_root)?;
    let escapes = relative.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes || relative.as_os_str().is_empty() {
        None
    } else {
        Some(relative)
    }
}

/// Copy a file or directory tree, creating parent directories. Returns files copied.
fn copy_asset(source: &Path, target: &Path) -> Result<usize, TriageError> {
    if source.is_dir() {
        fs::create_dir_all(target)?;
        let mut count = 0;
        for entry in fs::read_dir(source)? {
            let entry = entry?;
            count += copy_asset(&entry.path(), &target.join(entry.file_name()))?;
        }
        return Ok(count);
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(source, target)?;
    Ok(1)
}

#[cfg(test)]
#[path = "tests/export_tests.rs"]
mod tests;
