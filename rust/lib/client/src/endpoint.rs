use std::fmt;
use std::str::FromStr;

use supplydash_model::{Entity, InventoryRecord, Item, Order, Shipment, Supplier, Warehouse};

use crate::error::UnknownEndpoint;

/// One backend collection endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Orders,
    Inventories,
    Shipments,
    Suppliers,
    Items,
    Warehouses,
}

impl Endpoint {
    /// All endpoints, in the order a dashboard load issues them.
    pub const ALL: [Endpoint; 6] = [
        Endpoint::Orders,
        Endpoint::Inventories,
        Endpoint::Shipments,
        Endpoint::Suppliers,
        Endpoint::Items,
        Endpoint::Warehouses,
    ];

    /// Path segment under the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Orders => Order::COLLECTION,
            Endpoint::Inventories => InventoryRecord::COLLECTION,
            Endpoint::Shipments => Shipment::COLLECTION,
            Endpoint::Suppliers => Supplier::COLLECTION,
            Endpoint::Items => Item::COLLECTION,
            Endpoint::Warehouses => Warehouse::COLLECTION,
        }
    }

    /// `{base_url}/{path}`; a trailing slash on the base is ignored.
    pub fn url(self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Endpoint {
    type Err = UnknownEndpoint;

    /// Accepts singular and plural spellings, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "order" | "orders" => Ok(Endpoint::Orders),
            "inventory" | "inventories" => Ok(Endpoint::Inventories),
            "shipment" | "shipments" => Ok(Endpoint::Shipments),
            "supplier" | "suppliers" => Ok(Endpoint::Suppliers),
            "item" | "items" => Ok(Endpoint::Items),
            "warehouse" | "warehouses" => Ok(Endpoint::Warehouses),
            _ => Err(UnknownEndpoint(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        assert_eq!(
            Endpoint::Inventories.url("http://localhost:8080/api/"),
            "http://localhost:8080/api/inventories"
        );
        assert_eq!(Endpoint::Orders.url("http://h/api"), "http://h/api/orders");
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("Inventory".parse::<Endpoint>().unwrap(), Endpoint::Inventories);
        assert_eq!("suppliers".parse::<Endpoint>().unwrap(), Endpoint::Suppliers);
        assert!("projects".parse::<Endpoint>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for endpoint in Endpoint::ALL {
            assert_eq!(endpoint.to_string().parse::<Endpoint>().unwrap(), endpoint);
        }
    }
}
