use serde::{Deserialize, Serialize};

use crate::{InventoryRecord, Item, Order, Shipment, Supplier, Warehouse};

/// The six raw collections behind one dashboard load.
///
/// Each field is filled by exactly one endpoint fetch; a collection whose
/// fetch failed is left empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub orders: Vec<Order>,
    pub inventories: Vec<InventoryRecord>,
    pub shipments: Vec<Shipment>,
    pub suppliers: Vec<Supplier>,
    pub items: Vec<Item>,
    pub warehouses: Vec<Warehouse>,
}
