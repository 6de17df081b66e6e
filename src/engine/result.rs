//! Raw query result produced by the aggregate engine.

use std::collections::BTreeMap;

use crate::date::DateKey;

/// The eight daily metrics plus the per-promotion commission breakdown.
///
/// Amounts are raw f64 sums; fixed-precision rendering is the
/// formatter's job. `commission_per_promotion` is seeded with every
/// catalogue promotion and may additionally carry bucket `0`, the
/// no-promotion bucket, which only the formatter drops.
///
/// Immutable once computed; lives for one query invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub date: DateKey,
    pub items_sold: u64,
    pub num_customers: u64,
    pub total_discount: f64,
    pub avg_discount_rate: f64,
    pub avg_total: f64,
    pub total_commission: f64,
    pub avg_commission: f64,
    pub commission_per_promotion: BTreeMap<u64, f64>,
    /// Promotion descriptions captured from the catalogue at query time.
    pub promotion_names: BTreeMap<u64, String>,
}
