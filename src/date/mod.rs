//! Date keys and their ordering for date-scoped scans.

mod errors;
mod key;

pub use errors::{DateFormatError, DateResult};
pub use key::DateKey;
