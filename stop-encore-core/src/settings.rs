//! Shared user settings (last directories, recent gamelists).
//!
//! Both CLI and GUI read `~/.config/stop-encore/settings.toml` so a directory
//! opened in one frontend is the default in the other.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Maximum number of remembered source directories.
const MAX_RECENT: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    /// Directory of the most recently opened gamelist.
    pub last_source_dir: Option<PathBuf>,
    /// Directory most recently exported to.
    pub last_export_dir: Option<PathBuf>,
    #[serde(default)]
    pub recent: Vec<RecentDir>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentDir {
    pub path: PathBuf,
    pub last_opened: String,
    pub game_count: usize,
}

impl Settings {
    /// Record that `dir` was opened, moving it to the front of the recent list.
    pub fn remember_source(&mut self, dir: &Path, game_count: usize) {
        self.last_source_dir = Some(dir.to_path_buf());
        self.recent.retain(|r| r.path != dir);
        self.recent.insert(
            0,
            RecentDir {
                path: dir.to_path_buf(),
                last_opened: chrono::Utc::now().to_rfc3339(),
                game_count,
            },
        );
        self.recent.truncate(MAX_RECENT);
    }

    pub fn remember_export(&mut self, dir: &Path) {
        self.last_export_dir = Some(dir.to_path_buf());
    }
}

/// Returns `~/.config/stop-encore/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("stop-encore").join("settings.toml")
}

/// Load settings from disk, returning defaults if missing or corrupt.
pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

pub fn load_settings_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            Settings::default()
        }),
        Err(_) => Settings::default(),
    }
}

/// Save settings to disk atomically (write to temp, then rename).
pub fn save_settings(settings: &Settings) -> io::Result<()> {
    save_settings_to(settings, &settings_path())
}

pub fn save_settings_to(settings: &Settings, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(settings).map_err(io::Error::other)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Resolve the gamelist directory using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `last_source_dir` from the settings file
/// 3. Current working directory
pub fn resolve_source_dir(cli_override: Option<PathBuf>, settings: &Settings) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(ref p) = settings.last_source_dir {
        return p.clone();
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
