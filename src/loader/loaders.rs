//! The five entity loaders.
//!
//! Loader order matches the query pipeline: orders first, and its
//! order-id set gates order_lines. The date-scoped loaders ride the
//! early-exit scanner; order_lines is a whole-file membership filter
//! and promotions is an unconditional full load.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use crate::date::DateKey;
use crate::scan::DateScan;

use super::entities::{OrderLine, OrderSet};
use super::errors::{DataSourceError, LoadError, LoadResult};
use super::table::CsvTable;

const ORDER_COLUMNS: &[&str] = &["id", "customer_id", "vendor_id", "created_at"];
const ORDER_LINE_COLUMNS: &[&str] = &[
    "order_id",
    "product_id",
    "quantity",
    "full_price_amount",
    "discounted_amount",
    "total_amount",
];
const COMMISSION_COLUMNS: &[&str] = &["vendor_id", "date", "rate"];
const PRODUCT_PROMOTION_COLUMNS: &[&str] = &["product_id", "date", "promotion_id"];
const PROMOTION_COLUMNS: &[&str] = &["id", "description"];

/// Loads the orders created on `date`.
///
/// `created_at` carries a time component; only the text before the
/// first space participates in date matching, the time is discarded.
pub fn load_orders(path: &Path, date: DateKey) -> LoadResult<OrderSet> {
    let table = CsvTable::open(path, ORDER_COLUMNS)?;
    let (schema, records) = table.into_parts();

    let created_at = schema.position(3);
    let scan = DateScan::new(records, date, move |record| {
        record.get(created_at).and_then(|v| v.split(' ').next())
    });

    let mut orders = OrderSet::default();
    for record in scan {
        let record = record.map_err(|e| LoadError::scan(schema.path(), e))?;
        let order_id = schema.u64_field(&record, 0)?;
        let customer_id = schema.u64_field(&record, 1)?;
        let vendor_id = schema.u64_field(&record, 2)?;
        orders.insert(order_id, customer_id, vendor_id);
    }
    Ok(orders)
}

/// Loads the order lines belonging to the given order-id set.
///
/// The file is streamed in full; inclusion is decided purely by
/// membership of `order_id` in `order_ids`, never by re-deriving a
/// date from the line itself.
pub fn load_order_lines(path: &Path, order_ids: &HashSet<u64>) -> LoadResult<Vec<OrderLine>> {
    let table = CsvTable::open(path, ORDER_LINE_COLUMNS)?;
    let (schema, records) = table.into_parts();

    let mut lines = Vec::new();
    for record in records {
        let record = record.map_err(|e| DataSourceError::malformed(schema.path(), e))?;
        let order_id = schema.u64_field(&record, 0)?;
        if !order_ids.contains(&order_id) {
            continue;
        }
        lines.push(OrderLine {
            order_id,
            product_id: schema.u64_field(&record, 1)?,
            quantity: schema.u64_field(&record, 2)?,
            full_price_amount: schema.f64_field(&record, 3)?,
            discounted_amount: schema.f64_field(&record, 4)?,
            total_amount: schema.f64_field(&record, 5)?,
        });
    }
    Ok(lines)
}

/// Loads the vendor commission rates effective on `date`.
pub fn load_commissions(path: &Path, date: DateKey) -> LoadResult<BTreeMap<u64, f64>> {
    let table = CsvTable::open(path, COMMISSION_COLUMNS)?;
    let (schema, records) = table.into_parts();

    let date_column = schema.position(1);
    let scan = DateScan::new(records, date, move |record| record.get(date_column));

    let mut rates = BTreeMap::new();
    for record in scan {
        let record = record.map_err(|e| LoadError::scan(schema.path(), e))?;
        let vendor_id = schema.u64_field(&record, 0)?;
        let rate = schema.f64_field(&record, 2)?;
        rates.insert(vendor_id, rate);
    }
    Ok(rates)
}

/// Loads the product -> promotion assignments active on `date`.
pub fn load_product_promotions(path: &Path, date: DateKey) -> LoadResult<HashMap<u64, u64>> {
    let table = CsvTable::open(path, PRODUCT_PROMOTION_COLUMNS)?;
    let (schema, records) = table.into_parts();

    let date_column = schema.position(1);
    let scan = DateScan::new(records, date, move |record| record.get(date_column));

    let mut promotions = HashMap::new();
    for record in scan {
        let record = record.map_err(|e| LoadError::scan(schema.path(), e))?;
        let product_id = schema.u64_field(&record, 0)?;
        let promotion_id = schema.u64_field(&record, 2)?;
        promotions.insert(product_id, promotion_id);
    }
    Ok(promotions)
}

/// Loads the full promotion catalogue. Not date-scoped.
pub fn load_promotions(path: &Path) -> LoadResult<BTreeMap<u64, String>> {
    let table = CsvTable::open(path, PROMOTION_COLUMNS)?;
    let (schema, records) = table.into_parts();

    let mut catalogue = BTreeMap::new();
    for record in records {
        let record = record.map_err(|e| DataSourceError::malformed(schema.path(), e))?;
        let id = schema.u64_field(&record, 0)?;
        let description = schema.field(&record, 1)?.to_string();
        catalogue.insert(id, description);
    }
    Ok(catalogue)
}
