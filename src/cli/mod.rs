//! CLI module for tallydb
//!
//! Provides the command-line interface:
//! - query: one-shot daily-metrics query for a date
//! - validate: check a date string against the accepted format

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
