//! Cross-metric invariants of the aggregate engine, checked over
//! in-memory relations.

use std::collections::{BTreeMap, HashMap};

use tallydb::date::DateKey;
use tallydb::engine::{aggregate, NO_PROMOTION};
use tallydb::loader::{OrderLine, OrderSet};

fn line(
    order_id: u64,
    product_id: u64,
    quantity: u64,
    full: f64,
    discounted: f64,
) -> OrderLine {
    OrderLine {
        order_id,
        product_id,
        quantity,
        full_price_amount: full,
        discounted_amount: discounted,
        total_amount: discounted,
    }
}

/// A mid-sized relation set: three vendors, five orders, repeated
/// customers, products split across lines, partial promotion coverage.
fn relations() -> (
    OrderSet,
    Vec<OrderLine>,
    BTreeMap<u64, f64>,
    HashMap<u64, u64>,
    BTreeMap<u64, String>,
) {
    let mut orders = OrderSet::default();
    orders.insert(1, 10, 100);
    orders.insert(2, 11, 100);
    orders.insert(3, 10, 200);
    orders.insert(4, 12, 200);
    orders.insert(5, 13, 300);

    let lines = vec![
        line(1, 5, 2, 100.0, 90.0),
        line(1, 5, 1, 50.0, 45.0),
        line(1, 6, 4, 80.0, 80.0),
        line(2, 7, 1, 25.0, 20.0),
        line(3, 5, 3, 150.0, 150.0),
        line(4, 8, 2, 60.0, 48.0),
        line(5, 6, 6, 200.0, 180.0),
    ];

    let commissions: BTreeMap<u64, f64> =
        [(100, 0.10), (200, 0.08)].into_iter().collect();
    let product_promotions: HashMap<u64, u64> = [(5, 1), (8, 2)].into_iter().collect();
    let promotions: BTreeMap<u64, String> = [
        (1, "Summer sale".to_string()),
        (2, "Clearance".to_string()),
        (3, "Bundle week".to_string()),
    ]
    .into_iter()
    .collect();

    (orders, lines, commissions, product_promotions, promotions)
}

#[test]
fn customer_count_never_exceeds_order_count() {
    let (orders, lines, commissions, product_promotions, promotions) = relations();
    let result = aggregate(
        DateKey::new(2019, 8, 1),
        &orders,
        &lines,
        &commissions,
        &product_promotions,
        &promotions,
    );
    assert!(result.num_customers <= orders.len() as u64);
}

#[test]
fn items_sold_is_the_quantity_sum() {
    let (orders, lines, commissions, product_promotions, promotions) = relations();
    let result = aggregate(
        DateKey::new(2019, 8, 1),
        &orders,
        &lines,
        &commissions,
        &product_promotions,
        &promotions,
    );
    let expected: u64 = lines.iter().map(|l| l.quantity).sum();
    assert_eq!(result.items_sold, expected);
}

#[test]
fn discount_is_non_negative_when_no_line_is_marked_up() {
    let (orders, lines, commissions, product_promotions, promotions) = relations();
    assert!(lines
        .iter()
        .all(|l| l.discounted_amount <= l.full_price_amount));
    let result = aggregate(
        DateKey::new(2019, 8, 1),
        &orders,
        &lines,
        &commissions,
        &product_promotions,
        &promotions,
    );
    assert!(result.total_discount >= 0.0);
}

#[test]
fn per_promotion_totals_sum_to_total_commission() {
    let (orders, lines, commissions, product_promotions, promotions) = relations();
    let result = aggregate(
        DateKey::new(2019, 8, 1),
        &orders,
        &lines,
        &commissions,
        &product_promotions,
        &promotions,
    );
    let sum: f64 = result.commission_per_promotion.values().sum();
    assert_eq!(sum, result.total_commission);
    // Something actually accumulated, including the no-promotion bucket.
    assert!(result.total_commission > 0.0);
    assert!(result.commission_per_promotion[&NO_PROMOTION] > 0.0);
}

#[test]
fn catalogue_promotions_all_present_in_breakdown() {
    let (orders, lines, commissions, product_promotions, promotions) = relations();
    let result = aggregate(
        DateKey::new(2019, 8, 1),
        &orders,
        &lines,
        &commissions,
        &product_promotions,
        &promotions,
    );
    for id in promotions.keys() {
        assert!(result.commission_per_promotion.contains_key(id));
    }
    // Promotion 3 never sold; it is present and exactly zero.
    assert_eq!(result.commission_per_promotion[&3], 0.0);
}

#[test]
fn aggregation_is_deterministic() {
    let (orders, lines, commissions, product_promotions, promotions) = relations();
    let first = aggregate(
        DateKey::new(2019, 8, 1),
        &orders,
        &lines,
        &commissions,
        &product_promotions,
        &promotions,
    );
    let second = aggregate(
        DateKey::new(2019, 8, 1),
        &orders,
        &lines,
        &commissions,
        &product_promotions,
        &promotions,
    );
    assert_eq!(first, second);
}
