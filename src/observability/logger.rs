//! Structured JSON-line logging.
//!
//! One log line = one event. Lines are written synchronously to
//! stderr. Fields render in the order the caller passes them, which
//! keeps output deterministic for identical inputs.

use std::fmt::Write as _;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

/// Synchronous JSON-line logger.
pub struct Logger;

impl Logger {
    /// Log a normal-operation event
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Info, event, fields);
    }

    /// Log a recoverable issue
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Warn, event, fields);
    }

    /// Log an operation failure
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Error, event, fields);
    }

    fn emit(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(severity, event, fields);
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        let _ = handle.write_all(line.as_bytes());
        let _ = handle.flush();
    }

    /// Renders one event as a single JSON line, newline included.
    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut line = String::with_capacity(128);
        line.push_str("{\"event\":\"");
        escape_into(&mut line, event);
        line.push_str("\",\"severity\":\"");
        line.push_str(severity.as_str());
        line.push('"');
        for (key, value) in fields {
            line.push_str(",\"");
            escape_into(&mut line, key);
            line.push_str("\":\"");
            escape_into(&mut line, value);
            line.push('"');
        }
        line.push_str("}\n");
        line
    }
}

fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_shape() {
        let line = Logger::render(
            Severity::Info,
            "query_start",
            &[("date", "2019-08-01"), ("files", "5")],
        );
        assert_eq!(
            line,
            "{\"event\":\"query_start\",\"severity\":\"INFO\",\"date\":\"2019-08-01\",\"files\":\"5\"}\n"
        );
    }

    #[test]
    fn test_render_no_fields() {
        let line = Logger::render(Severity::Error, "query_failed", &[]);
        assert_eq!(line, "{\"event\":\"query_failed\",\"severity\":\"ERROR\"}\n");
    }

    #[test]
    fn test_render_escapes_values() {
        let line = Logger::render(Severity::Warn, "odd", &[("value", "a\"b\\c\nd")]);
        assert!(line.contains("a\\\"b\\\\c\\nd"));
        // Still a single line.
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn test_severity_strings() {
        assert_eq!(Severity::Info.as_str(), "INFO");
        assert_eq!(Severity::Warn.as_str(), "WARN");
        assert_eq!(Severity::Error.as_str(), "ERROR");
    }
}
