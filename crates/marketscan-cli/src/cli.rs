//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use marketscan_pipeline::Stage;

use crate::config::CONFIG_ENV;

/// Find underserved markets and validate them against reference data
#[derive(Parser, Debug)]
#[command(name = "marketscan")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Gather the news feed, indicator snapshot and publication trends
    Collect,
    /// Analyze an offline Reddit export
    ImportReddit {
        /// JSON array of submissions
        file: PathBuf,
    },
    /// Aggregate collected data into the combined analysis
    Analyze,
    /// Score, rank and profile market opportunities
    Synthesize,
    /// Cross-check profiles against the validation dataset
    Validate,
    /// Compile the executive summary and final report
    Report,
    /// Run every stage in order
    Run,
    /// Check that a report lists scored entries in descending order
    Verify {
        /// Markdown report to check
        report: PathBuf,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Command {
    /// The pipeline stage this command runs, if it runs exactly one.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Command::Collect => Some(Stage::Collect),
            Command::Analyze => Some(Stage::Analyze),
            Command::Synthesize => Some(Stage::Synthesize),
            Command::Validate => Some(Stage::Validate),
            Command::Report => Some(Stage::Report),
            _ => None,
        }
    }
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Write a config file with default values
    Init {
        /// Where to write it, instead of the per-user location
        #[arg(long)]
        file: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
    /// Print one value by dotted key, e.g. `news.page_size`
    Get {
        /// Dotted key
        key: String,
    },
}
