use serde::{Deserialize, Serialize};

use crate::entity::{nullable, Entity, EntityId, HasStatus};

/// Shipment: movement of an order between two addresses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    #[serde(default, deserialize_with = "nullable")]
    pub id: EntityId,

    #[serde(default, deserialize_with = "nullable")]
    pub status: String,

    /// Older backends call this `originLocation`.
    #[serde(default, alias = "originLocation", deserialize_with = "nullable")]
    pub origin_address: String,

    #[serde(default, alias = "destinationLocation", deserialize_with = "nullable")]
    pub destination_address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<EntityId>,

    #[serde(default, deserialize_with = "nullable")]
    pub tracking_number: String,

    /// ISO date (`YYYY-MM-DD`) as sent by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_date: Option<String>,
}

impl Entity for Shipment {
    const COLLECTION: &'static str = "shipments";
}

impl HasStatus for Shipment {
    fn status(&self) -> &str {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_location_aliases() {
        let s: Shipment = serde_json::from_str(
            r#"{"id":2,"status":"Shipped","originLocation":"Rotterdam","destinationLocation":"Oslo",
                "shipmentDate":"2024-03-01","estimatedDeliveryDate":null}"#,
        )
        .unwrap();
        assert_eq!(s.origin_address, "Rotterdam");
        assert_eq!(s.destination_address, "Oslo");
        assert_eq!(s.shipment_date.as_deref(), Some("2024-03-01"));
        assert!(s.estimated_delivery_date.is_none());
        assert!(s.order_id.is_none());
    }
}
