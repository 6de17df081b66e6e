//! Loader error types
//!
//! `DataSourceError` covers everything wrong with a backing file:
//! absent, missing expected columns, malformed records or numeric
//! fields. `LoadError` is the per-loader result error and additionally
//! carries scan failures with the file they occurred in.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::scan::ScanError;

/// Result type for data source access
pub type DataSourceResult<T> = Result<T, DataSourceError>;

/// Result type for entity loaders
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised by CSV source access
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("source file not found: {path}")]
    Missing { path: PathBuf },

    #[error("{path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path}: missing expected column {column:?}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("{path}: malformed record: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path}, line {line}: record too short for column {column:?}")]
    ShortRecord {
        path: PathBuf,
        line: u64,
        column: String,
    },

    #[error("{path}, line {line}: column {column:?} holds malformed number {value:?}")]
    BadNumber {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },
}

impl DataSourceError {
    /// Classify an open failure: a missing file gets its own variant.
    pub fn open(path: &Path, source: csv::Error) -> Self {
        let not_found = matches!(
            source.kind(),
            csv::ErrorKind::Io(e) if e.kind() == std::io::ErrorKind::NotFound
        );
        if not_found {
            Self::Missing {
                path: path.to_path_buf(),
            }
        } else {
            Self::Open {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Create a missing-column error
    pub fn missing_column(path: &Path, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            path: path.to_path_buf(),
            column: column.into(),
        }
    }

    /// Create a malformed-record error
    pub fn malformed(path: &Path, source: csv::Error) -> Self {
        Self::Malformed {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a short-record error
    pub fn short_record(path: &Path, line: u64, column: impl Into<String>) -> Self {
        Self::ShortRecord {
            path: path.to_path_buf(),
            line,
            column: column.into(),
        }
    }

    /// Create a malformed-number error
    pub fn bad_number(
        path: &Path,
        line: u64,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::BadNumber {
            path: path.to_path_buf(),
            line,
            column: column.into(),
            value: value.into(),
        }
    }
}

/// Errors raised by an entity loader
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Source(#[from] DataSourceError),

    #[error("{path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: ScanError,
    },
}

impl LoadError {
    /// Attach the scanned file to a scan failure
    pub fn scan(path: &Path, source: ScanError) -> Self {
        Self::Scan {
            path: path.to_path_buf(),
            source,
        }
    }
}
