//! Observability for the query pipeline.
//!
//! # Principles
//!
//! 1. Observability is read-only: no effect on query results
//! 2. Synchronous, no background threads, no buffering
//! 3. Deterministic output for identical inputs
//! 4. Log lines go to stderr; stdout is reserved for query output

mod logger;

pub use logger::{Logger, Severity};
