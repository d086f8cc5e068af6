use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) fn run_duplicates(dir: Option<PathBuf>) -> Result<(), CliError> {
    let session = super::open_session(dir)?;
    let catalog = session.catalog();

    if catalog.duplicates().is_empty() {
        log::info!(
            "{}",
            "No duplicate names.".if_supports_color(Stdout, |t| t.dimmed())
        );
        return Ok(());
    }

    let mut names: Vec<&String> = catalog.duplicates().iter().collect();
    names.sort();
    for name in names {
        log::info!("{}", name.if_supports_color(Stdout, |t| t.bold()));
        for record in catalog.records().iter().filter(|r| r.name() == name.as_str()) {
            log::info!("{}", super::format_row(&session, record));
        }
    }
    Ok(())
}
