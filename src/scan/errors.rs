//! Scanner error types

use thiserror::Error;

use crate::date::DateFormatError;

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors raised mid-scan.
///
/// A scan error is terminal for its scan: the scanner yields it once
/// and then stops.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("record {record}: unparseable date field {value:?}: {source}")]
    BadDate {
        record: u64,
        value: String,
        #[source]
        source: DateFormatError,
    },

    #[error("record {record} has no date field")]
    MissingDate { record: u64 },

    #[error("record {record}: malformed CSV record: {source}")]
    MalformedRecord {
        record: u64,
        #[source]
        source: csv::Error,
    },
}

impl ScanError {
    /// Create a bad-date error for the given 1-based record number
    pub fn bad_date(record: u64, value: impl Into<String>, source: DateFormatError) -> Self {
        Self::BadDate {
            record,
            value: value.into(),
            source,
        }
    }

    /// Create a missing-date-field error
    pub fn missing_date(record: u64) -> Self {
        Self::MissingDate { record }
    }

    /// Create a malformed-record error
    pub fn malformed_record(record: u64, source: csv::Error) -> Self {
        Self::MalformedRecord { record, source }
    }
}
