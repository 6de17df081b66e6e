//! The join-and-aggregate pass.
//!
//! A pure function of the five loaded relations; nothing is cached
//! between queries. Iteration runs over sorted maps and file-ordered
//! vectors, so the same inputs add the same floats in the same
//! sequence and the result is bit-identical across runs.

use std::collections::{BTreeMap, HashMap};

use crate::date::DateKey;
use crate::loader::{OrderLine, OrderSet};

use super::result::QueryResult;

/// Bucket key for commission earned on products without an active
/// promotion. Present in the raw breakdown, dropped at format time.
pub const NO_PROMOTION: u64 = 0;

/// Ratio under the engine-wide zero-denominator policy: a ratio over a
/// zero denominator is 0.0, never an error.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Computes the daily metrics for `date` from the loaded relations.
///
/// Commission walks vendor -> order -> distinct product: order lines are
/// grouped by (order, product) with their `total_amount` summed before
/// the vendor rate applies, so a product split across several lines of
/// one order is charged once, not once per line. Each (order, product)
/// commission is attributed to the promotion active for that product,
/// or to [`NO_PROMOTION`] when there is none.
pub fn aggregate(
    date: DateKey,
    orders: &OrderSet,
    lines: &[OrderLine],
    commissions: &BTreeMap<u64, f64>,
    product_promotions: &HashMap<u64, u64>,
    promotions: &BTreeMap<u64, String>,
) -> QueryResult {
    let items_sold: u64 = lines.iter().map(|line| line.quantity).sum();
    let num_customers = orders.customer_ids.len() as u64;
    let total_discount: f64 = lines
        .iter()
        .map(|line| line.full_price_amount - line.discounted_amount)
        .sum();
    let grand_total: f64 = lines.iter().map(|line| line.total_amount).sum();

    // Group line totals by (order, product) once; the reduction below
    // never rescans the line relation.
    let mut product_totals: HashMap<u64, BTreeMap<u64, f64>> = HashMap::new();
    for line in lines {
        *product_totals
            .entry(line.order_id)
            .or_default()
            .entry(line.product_id)
            .or_insert(0.0) += line.total_amount;
    }

    // Every catalogue promotion appears, commission or not; the
    // no-promotion bucket appears only once something lands in it.
    let mut per_promotion: BTreeMap<u64, f64> =
        promotions.keys().map(|&id| (id, 0.0)).collect();

    for (vendor_id, rate) in commissions {
        let Some(order_ids) = orders.orders_by_vendor.get(vendor_id) else {
            continue;
        };
        for order_id in order_ids {
            let Some(products) = product_totals.get(order_id) else {
                continue;
            };
            for (product_id, amount) in products {
                let promotion = product_promotions
                    .get(product_id)
                    .copied()
                    .unwrap_or(NO_PROMOTION);
                *per_promotion.entry(promotion).or_insert(0.0) += amount * rate;
            }
        }
    }

    let total_commission: f64 = per_promotion.values().sum();

    QueryResult {
        date,
        items_sold,
        num_customers,
        total_discount,
        avg_discount_rate: ratio(total_discount, grand_total),
        avg_total: ratio(grand_total, items_sold as f64),
        total_commission,
        avg_commission: ratio(total_commission, items_sold as f64),
        commission_per_promotion: per_promotion,
        promotion_names: promotions.clone(),
    }
}
