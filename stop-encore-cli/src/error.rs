use thiserror::Error;

use stop_encore_core::TriageError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error (reading prompts, flushing stdout)
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Loading, saving or exporting failed
    #[error("{0}")]
    Triage(#[from] TriageError),

    /// The user declined a confirmation prompt
    #[error("Aborted: {0}")]
    Aborted(String),
}

impl CliError {
    pub(crate) fn aborted(msg: impl Into<String>) -> Self {
        Self::Aborted(msg.into())
    }
}
