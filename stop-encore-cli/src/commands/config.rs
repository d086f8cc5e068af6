use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use stop_encore_core::settings;

use crate::CliError;

/// Show remembered directories.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings::settings_path();
    let settings = settings::load_settings();

    log::info!(
        "{}",
        "stop-encore settings".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let show_dir = |label: &str, dir: &Option<std::path::PathBuf>| match dir {
        Some(d) => log::info!("  {}: {}", label, d.display()),
        None => log::info!(
            "  {}: {}",
            label,
            "(none)".if_supports_color(Stdout, |t| t.dimmed())
        ),
    };
    show_dir("Last gamelist", &settings.last_source_dir);
    show_dir("Last export", &settings.last_export_dir);

    if !settings.recent.is_empty() {
        crate::log_blank();
        log::info!("  Recent gamelists:");
        for recent in &settings.recent {
            log::info!(
                "    {} {}",
                recent.path.display(),
                format!("({} games, {})", recent.game_count, recent.last_opened)
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings::settings_path().display());
    Ok(())
}
