//! Fixed-precision rendering of query results.

mod formatter;

pub use formatter::{format_result, FormattedResult};
