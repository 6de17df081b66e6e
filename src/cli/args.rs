//! CLI argument definitions using clap
//!
//! Commands:
//! - tallydb query <DATE> [--config <path>] [--data-dir <dir>] [--json]
//! - tallydb validate <DATE>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tallydb - deterministic daily sales metrics over CSV order logs
#[derive(Parser, Debug)]
#[command(name = "tallydb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the daily metrics for one date
    Query {
        /// Target date, YYYY-MM-DD
        date: String,

        /// Path to configuration file
        #[arg(long, default_value = "./tallydb.json")]
        config: PathBuf,

        /// Directory holding the CSV sources (overrides the config)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Print the result as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// Check a date string against the accepted YYYY-MM-DD format
    Validate {
        /// Candidate date string
        date: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
