use serde::{Deserialize, Serialize};

use crate::entity::{nullable, Entity, EntityId};
use crate::item::Item;
use crate::warehouse::Warehouse;

/// InventoryRecord: stock of one item held in one warehouse.
///
/// Both references are optional; the backend may return a record whose
/// item or warehouse has been deleted or was never linked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    #[serde(default, deserialize_with = "nullable")]
    pub id: EntityId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse: Option<Warehouse>,

    #[serde(default, deserialize_with = "nullable")]
    pub quantity: i64,
}

impl InventoryRecord {
    pub fn item_name(&self) -> Option<&str> {
        self.item.as_ref().and_then(Item::name_label)
    }

    pub fn warehouse_name(&self) -> Option<&str> {
        self.warehouse.as_ref().and_then(Warehouse::name_label)
    }

    pub fn category(&self) -> Option<&str> {
        self.item.as_ref().and_then(Item::category_label)
    }

    /// Unit price of the referenced item; 0 when the item is unresolved.
    pub fn unit_price(&self) -> f64 {
        self.item.as_ref().map_or(0.0, |item| item.price)
    }

    /// Stock value: unit price times quantity.
    pub fn value(&self) -> f64 {
        self.unit_price() * self.quantity as f64
    }
}

impl Entity for InventoryRecord {
    const COLLECTION: &'static str = "inventories";
}
