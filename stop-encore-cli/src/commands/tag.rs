use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use stop_encore_core::Bucket;

use crate::CliError;

pub(crate) fn run_tag(
    dir: Option<PathBuf>,
    bucket: Bucket,
    paths: &[String],
    yes: bool,
) -> Result<(), CliError> {
    let mut session = super::open_session(dir)?;

    for path in paths {
        session.classify_path(path, bucket)?;
        log::info!(
            "  {} {} {}",
            path,
            "\u{2192}".if_supports_color(Stdout, |t| t.dimmed()),
            bucket,
        );
    }

    super::save_with_confirmation(&session, yes)
}
