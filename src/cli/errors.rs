//! CLI error types

use thiserror::Error;

use crate::config::ConfigError;
use crate::query::QueryError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid date {0:?}: expected YYYY-MM-DD with year 1-9999, month 1-12, day 1-31")]
    InvalidDate(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("failed to render result: {0}")]
    Render(#[source] serde_json::Error),
}

impl CliError {
    /// Create an invalid-date usage error
    pub fn invalid_date(date: impl Into<String>) -> Self {
        Self::InvalidDate(date.into())
    }

    /// Process exit code: 2 for usage errors, 1 for everything else
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidDate(_) => 2,
            _ => 1,
        }
    }
}
