//! Display form of a query result.
//!
//! Counts render with no decimal places; monetary and rate values with
//! exactly two. Pure and side-effect-free: the raw result is left
//! untouched for callers that want the numbers.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::engine::{QueryResult, NO_PROMOTION};

/// A query result rendered to display strings.
///
/// The per-promotion breakdown drops the no-promotion bucket and is
/// keyed by promotion description, falling back to the numeric id for
/// promotions missing from the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedResult {
    pub date: String,
    pub items_sold: String,
    pub num_customers: String,
    pub total_discount: String,
    pub avg_discount_rate: String,
    pub avg_total: String,
    pub total_commission: String,
    pub avg_commission: String,
    pub total_commission_per_promotion: BTreeMap<String, String>,
}

/// Renders `result` for display.
pub fn format_result(result: &QueryResult) -> FormattedResult {
    let mut per_promotion = BTreeMap::new();
    for (&promotion, &amount) in &result.commission_per_promotion {
        if promotion == NO_PROMOTION {
            continue;
        }
        let name = result
            .promotion_names
            .get(&promotion)
            .cloned()
            .unwrap_or_else(|| promotion.to_string());
        per_promotion.insert(name, money(amount));
    }

    FormattedResult {
        date: result.date.to_string(),
        items_sold: result.items_sold.to_string(),
        num_customers: result.num_customers.to_string(),
        total_discount: money(result.total_discount),
        avg_discount_rate: money(result.avg_discount_rate),
        avg_total: money(result.avg_total),
        total_commission: money(result.total_commission),
        avg_commission: money(result.avg_commission),
        total_commission_per_promotion: per_promotion,
    }
}

fn money(amount: f64) -> String {
    format!("{:.2}", amount)
}
