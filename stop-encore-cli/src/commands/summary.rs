use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) fn run_summary(dir: Option<PathBuf>) -> Result<(), CliError> {
    let session = super::open_session(dir)?;
    let catalog = session.catalog();
    let counts = session.counts();

    log::info!(
        "{} {}",
        catalog.system_name().if_supports_color(Stdout, |t| t.bold()),
        format!("({})", catalog.source_dir().display()).if_supports_color(Stdout, |t| t.dimmed()),
    );
    crate::log_blank();
    log::info!("  Total:     {}", counts.total);
    log::info!(
        "  Accepted:  {}",
        counts.accepted.if_supports_color(Stdout, |t| t.green())
    );
    log::info!(
        "  Rejected:  {}",
        counts.rejected.if_supports_color(Stdout, |t| t.red())
    );
    log::info!(
        "  On Hold:   {}",
        counts.hold.if_supports_color(Stdout, |t| t.yellow())
    );
    log::info!("  Untagged:  {}", counts.untagged);

    let duplicates = catalog.duplicates().len();
    if duplicates > 0 {
        crate::log_blank();
        log::info!(
            "  {} {} names appear more than once",
            "*".if_supports_color(Stdout, |t| t.magenta()),
            duplicates,
        );
    }

    crate::log_blank();
    let progress = session.progress_path();
    if progress.exists() {
        log::info!(
            "Progress file: {}",
            progress.display().if_supports_color(Stdout, |t| t.cyan())
        );
    } else {
        log::info!(
            "{}",
            "No progress saved yet".if_supports_color(Stdout, |t| t.dimmed())
        );
    }
    Ok(())
}
