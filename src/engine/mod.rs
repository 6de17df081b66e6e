//! Join and aggregation over the loaded relations.

mod aggregate;
mod result;

pub use aggregate::{aggregate, NO_PROMOTION};
pub use result::QueryResult;
