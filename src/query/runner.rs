//! The query runner.
//!
//! One call = one query: the five sources are opened, scanned, and
//! closed in pipeline order (orders -> order_lines -> commissions ->
//! product_promotions -> promotions), then a single aggregation pass
//! produces the result. No state survives the call and concurrent
//! callers share nothing, each query owns its own readers and
//! relations.

use crate::config::Dataset;
use crate::date::DateKey;
use crate::engine::{self, QueryResult};
use crate::loader;
use crate::observability::Logger;

use super::errors::QueryError;

/// Runs the daily-metrics query for `date` against `dataset`.
///
/// `date` is expected to have passed [`DateKey::validate`]; that check
/// belongs to the outer caller. A string that does not even parse
/// still fails cleanly with the date error rather than panicking.
pub fn run_query(dataset: &Dataset, date: &str) -> Result<QueryResult, QueryError> {
    let key: DateKey = date.parse()?;
    Logger::info("query_start", &[("date", date)]);

    let orders = loader::load_orders(&dataset.orders, key)?;
    log_scan("orders", orders.len());

    let lines = loader::load_order_lines(&dataset.order_lines, &orders.order_ids)?;
    log_scan("order_lines", lines.len());

    let commissions = loader::load_commissions(&dataset.commissions, key)?;
    log_scan("commissions", commissions.len());

    let product_promotions =
        loader::load_product_promotions(&dataset.product_promotions, key)?;
    log_scan("product_promotions", product_promotions.len());

    let promotions = loader::load_promotions(&dataset.promotions)?;
    log_scan("promotions", promotions.len());

    let result = engine::aggregate(
        key,
        &orders,
        &lines,
        &commissions,
        &product_promotions,
        &promotions,
    );

    let items_sold = result.items_sold.to_string();
    let total_commission = format!("{:.2}", result.total_commission);
    Logger::info(
        "query_complete",
        &[
            ("date", date),
            ("items_sold", &items_sold),
            ("total_commission", &total_commission),
        ],
    );
    Ok(result)
}

fn log_scan(file: &str, rows: usize) {
    let rows = rows.to_string();
    Logger::info("scan_complete", &[("file", file), ("rows", &rows)]);
}
