//! `supplydash get <resource>`: one collection as a table or JSON.

use anyhow::Result;
use serde::Serialize;
use supplydash_aggregate::{low_stock, DeliveryBand, StockLevel};
use supplydash_client::{Endpoint, SupplyClient};
use supplydash_core::DashboardConfig;
use supplydash_model::{InventoryRecord, Item, Order, Shipment, Supplier, Warehouse};
use tracing::debug;

use crate::table::{Cell, Table};

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Default)]
pub struct GetOptions {
    /// Column to sort the table by.
    pub sort: Option<String>,
    pub descending: bool,
    /// Only inventory at or below the low-stock threshold.
    pub low_stock: bool,
}

pub async fn get(
    resource: &str,
    opts: &GetOptions,
    output_json: bool,
    config: &DashboardConfig,
) -> Result<()> {
    let endpoint: Endpoint = resource.parse()?;
    if opts.low_stock && endpoint != Endpoint::Inventories {
        anyhow::bail!("--low-stock only applies to inventories.");
    }

    let client = SupplyClient::new(config.base_url.trim(), config.retry_policy());
    debug!("fetching {} from {}", endpoint, client.base_url());
    let threshold = config.low_stock_threshold;

    let (mut table, body) = match endpoint {
        Endpoint::Orders => {
            let rows: Vec<Order> = client.list().await?;
            (orders_table(&rows), to_json(&rows)?)
        }
        Endpoint::Inventories => {
            let mut rows: Vec<InventoryRecord> = client.list().await?;
            if opts.low_stock {
                rows = low_stock(&rows, threshold).into_iter().cloned().collect();
            }
            (inventory_table(&rows, threshold), to_json(&rows)?)
        }
        Endpoint::Shipments => {
            let rows: Vec<Shipment> = client.list().await?;
            (shipments_table(&rows), to_json(&rows)?)
        }
        Endpoint::Suppliers => {
            let rows: Vec<Supplier> = client.list().await?;
            (suppliers_table(&rows), to_json(&rows)?)
        }
        Endpoint::Items => {
            let rows: Vec<Item> = client.list().await?;
            (items_table(&rows), to_json(&rows)?)
        }
        Endpoint::Warehouses => {
            let rows: Vec<Warehouse> = client.list().await?;
            (warehouses_table(&rows), to_json(&rows)?)
        }
    };

    if output_json {
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    if let Some(column) = &opts.sort {
        table.sort_by(column, opts.descending)?;
    }
    if table.is_empty() {
        println!("No {} found.", endpoint);
    } else {
        print!("{}", table.render());
        println!("\n{} {}", table.len(), endpoint);
    }
    Ok(())
}

fn to_json<T: Serialize>(rows: &[T]) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(rows)?)
}

fn label(value: Option<&str>) -> Cell {
    Cell::text(value.unwrap_or(NOT_AVAILABLE))
}

fn optional(value: &str) -> Cell {
    if value.trim().is_empty() {
        Cell::from(NOT_AVAILABLE)
    } else {
        Cell::from(value)
    }
}

pub fn orders_table(orders: &[Order]) -> Table {
    let mut table = Table::new(vec!["ID", "ITEM", "QUANTITY", "STATUS"]);
    for o in orders {
        table.push(vec![
            Cell::Int(o.id),
            label(o.item_name()),
            Cell::Int(o.quantity),
            optional(&o.status),
        ]);
    }
    table
}

pub fn inventory_table(inventories: &[InventoryRecord], threshold: i64) -> Table {
    let mut table = Table::new(vec!["ID", "ITEM", "WAREHOUSE", "QUANTITY", "STOCK LEVEL"]);
    for r in inventories {
        table.push(vec![
            Cell::Int(r.id),
            label(r.item_name()),
            label(r.warehouse_name()),
            Cell::Int(r.quantity),
            Cell::from(StockLevel::classify(r.quantity, threshold).as_str()),
        ]);
    }
    table
}

pub fn shipments_table(shipments: &[Shipment]) -> Table {
    let mut table = Table::new(vec![
        "ID", "ORDER", "ORIGIN", "DESTINATION", "STATUS", "TRACKING", "SHIPPED", "ETA",
    ]);
    for s in shipments {
        table.push(vec![
            Cell::Int(s.id),
            s.order_id.map(Cell::Int).unwrap_or_else(|| Cell::from(NOT_AVAILABLE)),
            optional(&s.origin_address),
            optional(&s.destination_address),
            optional(&s.status),
            optional(&s.tracking_number),
            label(s.shipment_date.as_deref()),
            label(s.estimated_delivery_date.as_deref()),
        ]);
    }
    table
}

pub fn suppliers_table(suppliers: &[Supplier]) -> Table {
    let mut table = Table::new(vec!["ID", "NAME", "EMAIL", "AVG DELIVERY", "BAND"]);
    for s in suppliers {
        table.push(vec![
            Cell::Int(s.id),
            optional(&s.name),
            optional(&s.contact_email),
            Cell::Float(s.average_delivery_time, 1),
            Cell::text(format!("{:?}", DeliveryBand::of(s.average_delivery_time))),
        ]);
    }
    table
}

pub fn items_table(items: &[Item]) -> Table {
    let mut table = Table::new(vec!["ID", "NAME", "CATEGORY", "PRICE", "DESCRIPTION"]);
    for i in items {
        table.push(vec![
            Cell::Int(i.id),
            label(i.name_label()),
            label(i.category_label()),
            Cell::Float(i.price, 2),
            optional(i.description.as_deref().unwrap_or_default()),
        ]);
    }
    table
}

pub fn warehouses_table(warehouses: &[Warehouse]) -> Table {
    let mut table = Table::new(vec!["ID", "NAME", "ADDRESS", "LATITUDE", "LONGITUDE"]);
    for w in warehouses {
        table.push(vec![
            Cell::Int(w.id),
            label(w.name_label()),
            optional(&w.address),
            Cell::Float(w.latitude, 4),
            Cell::Float(w.longitude, 4),
        ]);
    }
    table
}
