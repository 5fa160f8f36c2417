use serde::{Deserialize, Serialize};

use crate::entity::{nullable, Entity, EntityId};

/// Supplier: a vendor with its historical delivery performance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[serde(default, deserialize_with = "nullable")]
    pub id: EntityId,

    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    #[serde(default, deserialize_with = "nullable")]
    pub contact_email: String,

    /// Average delivery time in days.
    #[serde(default, deserialize_with = "nullable")]
    pub average_delivery_time: f64,
}

impl Entity for Supplier {
    const COLLECTION: &'static str = "suppliers";
}
