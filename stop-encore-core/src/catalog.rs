//! Loading a system directory's gamelist into an ordered catalog.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::error::TriageError;
use crate::gamelist::{self, GAMELIST_FILE_NAME};
use crate::record::GameRecord;

/// The games of one system directory, in gamelist order.
#[derive(Debug, Clone)]
pub struct Catalog {
    source_dir: PathBuf,
    system_name: String,
    records: Vec<GameRecord>,
    duplicates: HashSet<String>,
}

impl Catalog {
    /// Load `<dir>/gamelist.xml`.
    pub fn load(dir: &Path) -> Result<Self, TriageError> {
        if !dir.is_dir() {
            return Err(TriageError::not_found(format!(
                "{} is not a directory",
                dir.display()
            )));
        }

        let dir = dir.canonicalize()?;
        let gamelist_path = dir.join(GAMELIST_FILE_NAME);
        if !gamelist_path.is_file() {
            return Err(TriageError::not_found(format!(
                "No {} found in {}",
                GAMELIST_FILE_NAME,
                dir.display()
            )));
        }

        let records = gamelist::parse_gamelist_file(&gamelist_path)?;
        let catalog = Self::from_records(&dir, records);
        log::debug!(
            "Loaded {} games from {} ({} duplicate names)",
            catalog.len(),
            gamelist_path.display(),
            catalog.duplicates.len()
        );
        Ok(catalog)
    }

    /// Build a catalog from already parsed records.
    pub fn from_records(dir: &Path, records: Vec<GameRecord>) -> Self {
        let system_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let duplicates = find_duplicates(&records);
        Self {
            source_dir: dir.to_path_buf(),
            system_name,
            records,
            duplicates,
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Final component of the source directory (e.g. "snes").
    pub fn system_name(&self) -> &str {
        &self.system_name
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&GameRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose `path` equals `path`.
    pub fn find_by_path(&self, path: &str) -> Option<&GameRecord> {
        self.records.iter().find(|r| r.path() == path)
    }

    /// Names shared by two or more records.
    pub fn duplicates(&self) -> &HashSet<String> {
        &self.duplicates
    }

    pub fn is_duplicate(&self, record: &GameRecord) -> bool {
        self.duplicates.contains(record.name())
    }

    /// Resolve a gamelist-relative path against the source directory.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.source_dir.join(relative)
    }
}

/// Collect every name that appears on more than one record.
pub fn find_duplicates(records: &[GameRecord]) -> HashSet<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *seen.entry(record.name()).or_default() += 1;
    }
    seen.into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(name, _)| name.to_string())
        .collect()
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
