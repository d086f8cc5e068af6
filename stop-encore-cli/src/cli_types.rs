//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use stop_encore_core::{Bucket, FilterMode, LetterFilter};

#[derive(Parser)]
#[command(name = "stop-encore")]
#[command(about = "Triage a gamelist.xml and export the games worth keeping", long_about = None)]
pub(crate) struct Cli {
    /// Directory containing gamelist.xml (defaults to the last one opened)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which games a command looks at.
#[derive(Args, Clone, Debug)]
pub(crate) struct ViewArgs {
    /// Bucket filter: all, accepted, rejected, hold or untagged
    #[arg(short, long, default_value = "all")]
    pub mode: FilterMode,

    /// First character of the name: all, 0-9 or a single letter
    #[arg(short, long, default_value = "all")]
    pub letter: LetterFilter,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show game counts per bucket
    Summary,

    /// List games, colored by bucket
    List {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show every field of one game
    Show {
        /// The game's path as written in gamelist.xml
        path: String,
    },

    /// List names shared by more than one game
    Duplicates,

    /// Move games into a bucket and save progress
    Tag {
        /// accepted, rejected or hold
        bucket: Bucket,

        /// Game paths as written in gamelist.xml
        #[arg(required = true)]
        paths: Vec<String>,

        /// Overwrite the progress file without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Step through games and tag each one interactively
    Triage {
        #[command(flatten)]
        view: ViewArgs,

        /// Overwrite the progress file without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Copy accepted games and their media into a new directory
    Export {
        /// Destination directory
        dest: PathBuf,
    },

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show remembered directories
    Show,

    /// Print the settings file path
    Path,
}

#[cfg(test)]
#[path = "tests/cli_types_tests.rs"]
mod tests;
