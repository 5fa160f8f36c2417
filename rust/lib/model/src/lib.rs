//! Supply-chain entity snapshots as returned by the backend REST API.
//!
//! Every type here is a read-only view of a backend record. Decoding is
//! lenient: missing fields and explicit `null`s fall back to defaults, and
//! nested references (an inventory record's item or warehouse) are optional.

mod dataset;
mod entity;
mod inventory;
mod item;
mod order;
mod shipment;
mod supplier;
mod warehouse;

pub use dataset::Dataset;
pub use entity::{Entity, EntityId, HasStatus};
pub use inventory::InventoryRecord;
pub use item::Item;
pub use order::Order;
pub use shipment::Shipment;
pub use supplier::Supplier;
pub use warehouse::Warehouse;
