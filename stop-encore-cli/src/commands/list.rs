use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use stop_encore_core::FilterState;

use crate::CliError;
use crate::cli_types::ViewArgs;

pub(crate) fn run_list(dir: Option<PathBuf>, view: ViewArgs) -> Result<(), CliError> {
    let mut session = super::open_session(dir)?;
    session.set_filter(FilterState::new(view.mode, view.letter));

    for record in session.visible_records() {
        log::info!("{}", super::format_row(&session, record));
    }

    crate::log_blank();
    log::info!(
        "{}",
        format!(
            "{} of {} games shown ({}, {})",
            session.visible().len(),
            session.catalog().len(),
            view.mode,
            view.letter.label(),
        )
        .if_supports_color(Stdout, |t| t.dimmed()),
    );
    Ok(())
}
