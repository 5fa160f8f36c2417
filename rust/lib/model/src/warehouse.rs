use serde::{Deserialize, Serialize};

use crate::entity::{non_empty, nullable, Entity, EntityId};

/// Warehouse: a physical stock location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    #[serde(default, deserialize_with = "nullable")]
    pub id: EntityId,

    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    #[serde(default, deserialize_with = "nullable")]
    pub address: String,

    #[serde(default, deserialize_with = "nullable")]
    pub latitude: f64,

    #[serde(default, deserialize_with = "nullable")]
    pub longitude: f64,
}

impl Warehouse {
    pub fn name_label(&self) -> Option<&str> {
        non_empty(&self.name)
    }
}

impl Entity for Warehouse {
    const COLLECTION: &'static str = "warehouses";
}
