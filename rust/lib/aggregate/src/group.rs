use std::collections::HashMap;
use std::ops::AddAssign;

use serde::Serialize;
use supplydash_model::InventoryRecord;

/// Label for inventory whose warehouse is missing or unnamed.
pub const UNKNOWN_WAREHOUSE: &str = "Unknown Warehouse";

/// Label for inventory whose item is missing or has no category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// One aggregate row: a grouping key and the summed value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTotal<V> {
    pub key: String,
    pub total: V,
}

/// Group `records` by `key` and sum `value` per group.
///
/// Rows come out in the order each key is first seen.
pub fn sum_by_key<T, V, K, F>(records: &[T], key: K, value: F) -> Vec<GroupTotal<V>>
where
    V: Copy + Default + AddAssign,
    K: for<'a> Fn(&'a T) -> &'a str,
    F: Fn(&T) -> V,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<GroupTotal<V>> = Vec::new();

    for record in records {
        let k = key(record);
        let slot = *index.entry(k).or_insert_with(|| {
            rows.push(GroupTotal {
                key: k.to_string(),
                total: V::default(),
            });
            rows.len() - 1
        });
        rows[slot].total += value(record);
    }

    rows
}

/// Units in stock per warehouse name.
pub fn stock_by_warehouse(inventories: &[InventoryRecord]) -> Vec<GroupTotal<i64>> {
    sum_by_key(
        inventories,
        |inv| inv.warehouse_name().unwrap_or(UNKNOWN_WAREHOUSE),
        |inv| inv.quantity,
    )
}

/// Stock value (`price * quantity`) per item category.
pub fn value_by_category(inventories: &[InventoryRecord]) -> Vec<GroupTotal<f64>> {
    sum_by_key(
        inventories,
        |inv| inv.category().unwrap_or(UNCATEGORIZED),
        InventoryRecord::value,
    )
}
