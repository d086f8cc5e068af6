//! stop-encore CLI
//!
//! Command-line interface for triaging a gamelist.xml into accepted, rejected
//! and on-hold games, and exporting the accepted ones.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.quiet, cli.verbose);

    let dir = cli.dir;
    let result = match cli.command {
        Commands::Summary => commands::summary::run_summary(dir),
        Commands::List { view } => commands::list::run_list(dir, view),
        Commands::Show { path } => commands::show::run_show(dir, &path),
        Commands::Duplicates => commands::duplicates::run_duplicates(dir),
        Commands::Tag { bucket, paths, yes } => commands::tag::run_tag(dir, bucket, &paths, yes),
        Commands::Triage { view, yes } => commands::triage::run_triage(dir, view, yes),
        Commands::Export { dest } => commands::export::run_export(dir, &dest, cli.quiet),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    };

    if let Err(e) = result {
        log::error!(
            "{} {}",
            "Error:".if_supports_color(Stdout, |t| t.red()),
            e
        );
        std::process::exit(1);
    }
}

/// Install the logger that carries all user-facing output.
///
/// Normal runs print bare messages; `--verbose` adds timestamps and levels.
fn init_logger(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout);
    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.init();
}

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
