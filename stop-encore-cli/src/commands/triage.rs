use std::io::Write;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use stop_encore_core::{Bucket, FilterState};

use crate::CliError;
use crate::cli_types::ViewArgs;

/// What the user typed at the triage prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Tag(Bucket),
    Skip,
    Quit,
}

impl Action {
    /// Parse one prompt answer. Empty input skips; end of input quits.
    pub(crate) fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "" | "s" | "skip" => Some(Action::Skip),
            "q" | "quit" => Some(Action::Quit),
            other => other.parse().ok().map(Action::Tag),
        }
    }
}

/// Walk the filtered games one by one, tagging each from keyboard input.
pub(crate) fn run_triage(dir: Option<PathBuf>, view: ViewArgs, yes: bool) -> Result<(), CliError> {
    let mut session = super::open_session(dir)?;
    session.set_filter(FilterState::new(view.mode, view.letter));

    // The visible list shrinks under bucket filters as games are tagged, so
    // walk a snapshot of the paths instead of the live selection.
    let queue: Vec<String> = session
        .visible_records()
        .map(|r| r.path().to_string())
        .collect();
    if queue.is_empty() {
        log::info!(
            "{}",
            "No games match this filter.".if_supports_color(Stdout, |t| t.dimmed())
        );
        return Ok(());
    }

    let total = queue.len();
    let mut tagged = 0usize;
    for (i, path) in queue.iter().enumerate() {
        let Some(record) = session.catalog().find_by_path(path) else {
            continue;
        };

        crate::log_blank();
        log::info!(
            "{} {}",
            format!("[{}/{}]", i + 1, total).if_supports_color(Stdout, |t| t.dimmed()),
            super::format_row(&session, record).trim_start(),
        );
        log::info!("  Region: {}", record.region());
        log::info!("  {}", record.description());

        let action = loop {
            print!("  [a]ccept [r]eject [h]old [s]kip [q]uit > ");
            std::io::stdout().flush()?;

            let mut input = String::new();
            if std::io::stdin().read_line(&mut input)? == 0 {
                break Action::Quit;
            }
            match Action::parse(&input) {
                Some(action) => break action,
                None => log::warn!("  Unknown choice: {}", input.trim()),
            }
        };

        match action {
            Action::Tag(bucket) => {
                session.classify_path(path, bucket)?;
                tagged += 1;
            }
            Action::Skip => {}
            Action::Quit => break,
        }
    }

    crate::log_blank();
    if tagged == 0 {
        log::info!(
            "{}",
            "Nothing tagged, progress file unchanged.".if_supports_color(Stdout, |t| t.dimmed())
        );
        return Ok(());
    }
    log::info!("Tagged {} games", tagged);
    super::save_with_confirmation(&session, yes)
}

#[cfg(test)]
#[path = "../tests/triage_tests.rs"]
mod tests;
