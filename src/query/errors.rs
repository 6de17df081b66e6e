//! Query-level error type
//!
//! Everything a query can fail with, surfaced unrecovered to the
//! caller: there is no retry, a malformed input file is fatal for that
//! query.

use thiserror::Error;

use crate::date::DateFormatError;
use crate::loader::LoadError;

/// Errors surfaced by `run_query`
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid date: {0}")]
    Date(#[from] DateFormatError),

    #[error(transparent)]
    Load(#[from] LoadError),
}
