pub(crate) mod config;
pub(crate) mod duplicates;
pub(crate) mod export;
pub(crate) mod list;
pub(crate) mod show;
pub(crate) mod summary;
pub(crate) mod tag;
pub(crate) mod triage;

use std::io::Write;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use stop_encore_core::settings::{self, Settings};
use stop_encore_core::{GameRecord, RowStyle, Session};

use crate::CliError;

/// Open the gamelist in `dir` (or the remembered one) and apply saved progress.
///
/// The opened directory becomes the default for the next run.
pub(crate) fn open_session(dir: Option<PathBuf>) -> Result<Session, CliError> {
    let mut settings = settings::load_settings();
    let source = settings::resolve_source_dir(dir, &settings);
    let mut session = Session::open(&source)?;

    match session.load_progress()? {
        Some(summary) => log::debug!(
            "Restored {} tags from {}",
            summary.restored,
            session.progress_path().display()
        ),
        None => log::debug!("No saved progress for {}", session.catalog().system_name()),
    }

    remember_source(&mut settings, &session);
    Ok(session)
}

fn remember_source(settings: &mut Settings, session: &Session) {
    let catalog = session.catalog();
    settings.remember_source(catalog.source_dir(), catalog.len());
    if let Err(e) = settings::save_settings(settings) {
        log::warn!("Failed to save settings: {}", e);
    }
}

/// Ask a yes/no question on stdout; anything but `y` means no.
pub(crate) fn confirm(question: &str) -> Result<bool, CliError> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Save progress, asking before replacing an existing file unless `yes` is set.
pub(crate) fn save_with_confirmation(session: &Session, yes: bool) -> Result<(), CliError> {
    let path = session.progress_path();
    if path.exists() && !yes && !confirm(&format!("Overwrite {}?", path.display()))? {
        return Err(CliError::aborted("progress not saved"));
    }

    let path = session.save_progress(true)?;
    let counts = session.counts();
    log::info!(
        "  {} Saved {} ({} accepted, {} rejected, {} on hold)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        counts.accepted,
        counts.rejected,
        counts.hold,
    );
    Ok(())
}

/// One line describing a game, colored by bucket.
pub(crate) fn format_row(session: &Session, record: &GameRecord) -> String {
    let path = record.path().if_supports_color(Stdout, |t| t.dimmed()).to_string();
    match session.row_style(record) {
        RowStyle::Accepted => format!(
            "  {} {}  {}",
            "A".if_supports_color(Stdout, |t| t.green()),
            record.name().if_supports_color(Stdout, |t| t.green()),
            path
        ),
        RowStyle::Rejected => format!(
            "  {} {}  {}",
            "R".if_supports_color(Stdout, |t| t.red()),
            record.name().if_supports_color(Stdout, |t| t.red()),
            path
        ),
        RowStyle::Hold => format!(
            "  {} {}  {}",
            "H".if_supports_color(Stdout, |t| t.yellow()),
            record.name().if_supports_color(Stdout, |t| t.yellow()),
            path
        ),
        RowStyle::DuplicateUntagged => format!(
            "  {} {}  {}",
            "*".if_supports_color(Stdout, |t| t.magenta()),
            record.name().if_supports_color(Stdout, |t| t.magenta()),
            path
        ),
        RowStyle::Plain => format!("  {} {}  {}", " ", record.name(), path),
    }
}
