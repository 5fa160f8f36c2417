use serde::{Deserialize, Serialize};

use crate::entity::{non_empty, nullable, Entity, EntityId};

/// Item: a catalog product that orders and inventory records refer to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, deserialize_with = "nullable")]
    pub id: EntityId,

    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    /// Free-text category label; empty means uncategorized.
    #[serde(default, deserialize_with = "nullable")]
    pub category: String,

    /// Unit price.
    #[serde(default, deserialize_with = "nullable")]
    pub price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Item {
    /// Category label, or `None` when the backend left it blank.
    pub fn category_label(&self) -> Option<&str> {
        non_empty(&self.category)
    }

    pub fn name_label(&self) -> Option<&str> {
        non_empty(&self.name)
    }
}

impl Entity for Item {
    const COLLECTION: &'static str = "items";
}
