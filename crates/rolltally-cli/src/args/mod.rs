mod common;

pub use common::*;

use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rolltally")]
#[command(
    about = "Critical and fumble statistics from dice-roll session transcripts",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Config file (default: ~/.rolltally/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a saved transcript and print per-participant statistics
    Report {
        /// Saved HTML transcript
        file: PathBuf,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Print clipboard-ready text for one participant, or for everyone displayed
    ///
    /// Text goes to stdout; pipe it to your clipboard tool
    /// (e.g. `rolltally copy log.html | pbcopy`).
    Copy {
        /// Saved HTML transcript
        file: PathBuf,

        /// Only this participant (uses the single-participant template)
        #[arg(long, short)]
        participant: Option<String>,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the config file path in use
    Path,

    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
