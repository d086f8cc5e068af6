use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use stop_encore_core::{TriageError, TriageStatus};

use crate::CliError;

pub(crate) fn run_show(dir: Option<PathBuf>, path: &str) -> Result<(), CliError> {
    let session = super::open_session(dir)?;
    let record = session
        .catalog()
        .find_by_path(path)
        .ok_or_else(|| TriageError::not_found(format!("No game with path {path}")))?;

    log::info!("{}", record.name().if_supports_color(Stdout, |t| t.bold()));
    let status = match session.status_of(record) {
        TriageStatus::Tagged(bucket) => bucket.label(),
        TriageStatus::Untagged => "Untagged",
    };
    log::info!("  Status: {}", status);
    if session.catalog().is_duplicate(record) {
        log::info!(
            "  {}",
            "Another game has the same name".if_supports_color(Stdout, |t| t.magenta())
        );
    }
    crate::log_blank();

    for (key, value) in record.fields() {
        log::info!(
            "  {}: {}",
            key.if_supports_color(Stdout, |t| t.dimmed()),
            value
        );
    }

    if let Some(image) = record.image()
        && !session.catalog().resolve(image).exists()
    {
        log::warn!(
            "  {} image not found: {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            image,
        );
    }
    Ok(())
}
