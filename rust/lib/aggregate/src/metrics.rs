use serde::Serialize;
use supplydash_model::Dataset;

use crate::stock::low_stock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    TotalOrders,
    ShipmentsInTransit,
    ActiveSuppliers,
    LowStockAlerts,
}

impl MetricKind {
    pub fn title(self) -> &'static str {
        match self {
            MetricKind::TotalOrders => "Total Orders",
            MetricKind::ShipmentsInTransit => "Shipments In Transit",
            MetricKind::ActiveSuppliers => "Active Suppliers",
            MetricKind::LowStockAlerts => "Low Stock Alerts",
        }
    }
}

/// One headline number with a detail line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub kind: MetricKind,
    pub title: String,
    pub value: usize,
    pub details: String,
    /// Set when the card needs attention.
    pub alert: bool,
}

impl MetricCard {
    fn new(kind: MetricKind, value: usize, details: impl Into<String>, alert: bool) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            value,
            details: details.into(),
            alert,
        }
    }
}

/// The four headline metrics of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSummary {
    pub total_orders: MetricCard,
    pub shipments: MetricCard,
    pub suppliers: MetricCard,
    pub low_stock: MetricCard,
    /// Sum of `quantity` across all orders.
    pub total_units: i64,
}

impl MetricSummary {
    /// Cards in display order.
    pub fn cards(&self) -> [&MetricCard; 4] {
        [&self.total_orders, &self.shipments, &self.suppliers, &self.low_stock]
    }

    pub fn has_alert(&self) -> bool {
        self.cards().iter().any(|c| c.alert)
    }
}

pub fn metric_summary(data: &Dataset, low_stock_threshold: i64) -> MetricSummary {
    let total_units: i64 = data.orders.iter().map(|o| o.quantity).sum();
    let low_count = low_stock(&data.inventories, low_stock_threshold).len();

    MetricSummary {
        total_orders: MetricCard::new(
            MetricKind::TotalOrders,
            data.orders.len(),
            format!("{} units", group_thousands(total_units)),
            false,
        ),
        shipments: MetricCard::new(
            MetricKind::ShipmentsInTransit,
            data.shipments.len(),
            "Awaiting Delivery",
            false,
        ),
        suppliers: MetricCard::new(
            MetricKind::ActiveSuppliers,
            data.suppliers.len(),
            "In Good Standing",
            false,
        ),
        low_stock: MetricCard::new(
            MetricKind::LowStockAlerts,
            low_count,
            format!("{low_count} items to reorder"),
            low_count > 0,
        ),
        total_units,
    }
}

/// `1234567` -> `1,234,567`.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use supplydash_model::{InventoryRecord, Order, Shipment, Supplier};

    use super::*;

    fn dataset() -> Dataset {
        Dataset {
            orders: vec![
                Order { quantity: 1200, ..Default::default() },
                Order { quantity: 34, ..Default::default() },
            ],
            inventories: vec![
                InventoryRecord { quantity: 3, ..Default::default() },
                InventoryRecord { quantity: 90, ..Default::default() },
            ],
            shipments: vec![Shipment::default()],
            suppliers: vec![Supplier::default(), Supplier::default()],
            ..Default::default()
        }
    }

    #[test]
    fn summarizes_counts_and_units() {
        let m = metric_summary(&dataset(), 20);
        assert_eq!(m.total_orders.value, 2);
        assert_eq!(m.total_orders.details, "1,234 units");
        assert_eq!(m.total_units, 1234);
        assert_eq!(m.shipments.value, 1);
        assert_eq!(m.suppliers.value, 2);
        assert_eq!(m.low_stock.value, 1);
        assert_eq!(m.low_stock.details, "1 items to reorder");
    }

    #[test]
    fn only_low_stock_card_alerts() {
        let m = metric_summary(&dataset(), 20);
        assert!(m.low_stock.alert);
        assert!(!m.total_orders.alert && !m.shipments.alert && !m.suppliers.alert);
        assert!(m.has_alert());

        let healthy = metric_summary(&dataset(), 2);
        assert!(!healthy.low_stock.alert);
        assert!(!healthy.has_alert());
    }

    #[test]
    fn empty_dataset() {
        let m = metric_summary(&Dataset::default(), 20);
        assert!(m.cards().iter().all(|c| c.value == 0 && !c.alert));
        assert_eq!(m.total_orders.details, "0 units");
    }

    #[test]
    fn thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-45000), "-45,000");
    }
}
