//! Date parsing errors

use thiserror::Error;

/// Result type for date parsing
pub type DateResult<T> = Result<T, DateFormatError>;

/// Errors raised while parsing a `YYYY-MM-DD` string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateFormatError {
    #[error("expected three hyphen-separated fields in {input:?}")]
    FieldCount { input: String },

    #[error("non-integer field {field:?} in {input:?}")]
    NonInteger { input: String, field: String },
}

impl DateFormatError {
    /// Create a field-count error
    pub fn field_count(input: impl Into<String>) -> Self {
        Self::FieldCount {
            input: input.into(),
        }
    }

    /// Create a non-integer field error
    pub fn non_integer(input: impl Into<String>, field: impl Into<String>) -> Self {
        Self::NonInteger {
            input: input.into(),
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_offending_input() {
        let err = DateFormatError::field_count("orange");
        assert!(format!("{}", err).contains("orange"));

        let err = DateFormatError::non_integer("20ab-01-01", "20ab");
        let display = format!("{}", err);
        assert!(display.contains("20ab"));
    }
}
