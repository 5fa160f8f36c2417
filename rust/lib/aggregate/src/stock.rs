use serde::Serialize;
use supplydash_model::{EntityId, InventoryRecord};

/// Quantity at or below which an inventory record needs reordering.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 20;

/// How many low-stock records the watch list shows.
pub const WATCH_LIST_LIMIT: usize = 5;

/// Inventory records with `quantity <= threshold`, in input order.
pub fn low_stock(inventories: &[InventoryRecord], threshold: i64) -> Vec<&InventoryRecord> {
    inventories.iter().filter(|inv| inv.quantity <= threshold).collect()
}

/// Coarse stock level used by the inventory table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    Low,
    Medium,
    High,
}

impl StockLevel {
    /// `Low` up to the threshold, `Medium` up to twice it, `High` above.
    pub fn classify(quantity: i64, threshold: i64) -> Self {
        if quantity <= threshold {
            StockLevel::Low
        } else if quantity <= threshold.saturating_mul(2) {
            StockLevel::Medium
        } else {
            StockLevel::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StockLevel::Low => "Low",
            StockLevel::Medium => "Medium",
            StockLevel::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchEntry {
    pub id: EntityId,
    /// Item name, or `Item ID: {id}` when the item is unresolved.
    pub label: String,
    pub quantity: i64,
}

/// The first few low-stock records plus how many were left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WatchList {
    pub entries: Vec<WatchEntry>,
    pub remaining: usize,
}

impl WatchList {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn watch_list(inventories: &[InventoryRecord], threshold: i64, limit: usize) -> WatchList {
    let low = low_stock(inventories, threshold);
    let remaining = low.len().saturating_sub(limit);
    let entries = low
        .into_iter()
        .take(limit)
        .map(|inv| WatchEntry {
            id: inv.id,
            label: inv
                .item_name()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Item ID: {}", inv.id)),
            quantity: inv.quantity,
        })
        .collect();
    WatchList { entries, remaining }
}
