use std::path::PathBuf;

/// Errors that can occur while loading, triaging or exporting a gamelist.
#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The source directory or its gamelist.xml does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The gamelist parsed as XML but a `game` entry is unusable.
    #[error("Invalid gamelist: {0}")]
    InvalidGamelist(String),

    /// A progress file already exists and overwriting was not confirmed.
    #[error("Progress file already exists: {}", .0.display())]
    ProgressExists(PathBuf),

    #[error("No accepted games to export")]
    NothingToExport,

    /// Exporting into the source directory would overwrite its gamelist.
    #[error("Export directory is the source directory: {}", .0.display())]
    DestinationIsSource(PathBuf),
}

impl TriageError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_gamelist(msg: impl Into<String>) -> Self {
        Self::InvalidGamelist(msg.into())
    }
}
