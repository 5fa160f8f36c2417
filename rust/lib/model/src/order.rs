use serde::{Deserialize, Serialize};

use crate::entity::{nullable, Entity, EntityId, HasStatus};
use crate::item::Item;

/// Order: a request for `quantity` units of an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, deserialize_with = "nullable")]
    pub id: EntityId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,

    #[serde(default, deserialize_with = "nullable")]
    pub quantity: i64,

    /// Lifecycle label: Processing, Shipped, Delivered.
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
}

impl Order {
    pub fn item_name(&self) -> Option<&str> {
        self.item.as_ref().and_then(Item::name_label)
    }
}

impl Entity for Order {
    const COLLECTION: &'static str = "orders";
}

impl HasStatus for Order {
    fn status(&self) -> &str {
        &self.status
    }
}
