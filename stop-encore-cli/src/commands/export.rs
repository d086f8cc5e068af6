use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use stop_encore_core::settings;
use stop_encore_core::{ExportProgress, SkipReason};

use crate::CliError;

pub(crate) fn run_export(dir: Option<PathBuf>, dest: &Path, quiet: bool) -> Result<(), CliError> {
    let session = super::open_session(dir)?;

    log::info!(
        "Exporting accepted {} games to: {}",
        session.catalog().system_name(),
        dest.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .expect("static pattern")
                .progress_chars("=> "),
        );
        pb
    };

    let progress_callback = |progress: ExportProgress| match progress {
        ExportProgress::Started { total } => {
            pb.set_length(total as u64);
        }
        ExportProgress::Copying { ref file } => {
            pb.set_message(file.clone());
            pb.tick();
        }
        ExportProgress::Exported { done, ref name, .. } => {
            pb.set_position(done as u64);
            pb.set_message(name.clone());
        }
        ExportProgress::Done => {
            pb.finish_and_clear();
        }
    };

    let result = session.export(dest, &progress_callback);
    pb.finish_and_clear();
    let summary = result?;

    let mut settings = settings::load_settings();
    settings.remember_export(dest);
    if let Err(e) = settings::save_settings(&settings) {
        log::warn!("Failed to save settings: {}", e);
    }

    for skipped in &summary.skipped {
        let reason = match skipped.reason {
            SkipReason::Missing => "missing",
            SkipReason::OutsideSource => "outside the gamelist directory",
            SkipReason::ContainsDestination => "contains the export directory",
        };
        log::warn!(
            "  {} {} {} ({}): {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            skipped.game,
            skipped.field.if_supports_color(Stdout, |t| t.dimmed()),
            reason,
            skipped.value,
        );
    }

    crate::log_blank();
    log::info!(
        "  {} {} games exported, {} files copied",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.games,
        summary.files_copied,
    );
    if !summary.skipped.is_empty() {
        log::warn!(
            "  {} {} files skipped",
            "?".if_supports_color(Stdout, |t| t.yellow()),
            summary.skipped.len(),
        );
    }
    log::info!(
        "  Gamelist: {}",
        summary
            .gamelist_path
            .display()
            .if_supports_color(Stdout, |t| t.cyan())
    );
    Ok(())
}
