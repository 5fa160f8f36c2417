//! `supplydash dashboard`: one full load rendered as text panels.

use std::fmt::Write;

use anyhow::Result;
use supplydash_aggregate::{group_thousands, DashboardView, GroupTotal, StatusCount, StatusTone};
use supplydash_client::Endpoint;
use supplydash_core::{Dashboard, DashboardConfig, DashboardError};
use tracing::debug;

const BAR_WIDTH: usize = 30;

pub async fn show(config: &DashboardConfig, output_json: bool) -> Result<()> {
    debug!("loading dashboard from {} (low-stock threshold {})", config.base_url, config.low_stock_threshold);
    let dashboard = Dashboard::new(config)?;
    let snapshot = dashboard.refresh().await.map_err(retry_hint)?;

    if output_json {
        println!("{}", serde_json::to_string_pretty(&snapshot.view)?);
    } else {
        print!("{}", render(&snapshot.view, &snapshot.degraded));
    }
    Ok(())
}

/// Text rendering of every dashboard panel.
pub fn render(view: &DashboardView, degraded: &[Endpoint]) -> String {
    let mut out = String::new();

    section(&mut out, "Overview");
    for card in view.metrics.cards() {
        let marker = if card.alert { "!" } else { " " };
        let _ = writeln!(out, "{} {:<22} {:>6}  {}", marker, card.title, card.value, card.details);
    }

    section(&mut out, "Order Status");
    status_panel(&mut out, &view.order_status);

    section(&mut out, "Shipment Status");
    status_panel(&mut out, &view.shipment_status);

    section(&mut out, "Stock by Warehouse");
    let max = view.stock_by_warehouse.iter().map(|g| g.total).max().unwrap_or(0);
    for GroupTotal { key, total } in &view.stock_by_warehouse {
        let units = format!("{} units", group_thousands(*total));
        let _ = writeln!(out, "  {:<24} {:>14}  {}", key, units, bar(*total as f64, max as f64));
    }
    if view.stock_by_warehouse.is_empty() {
        out.push_str("  (no inventory)\n");
    }

    section(&mut out, "Inventory Value by Category");
    let max = view
        .value_by_category
        .iter()
        .map(|g| g.total)
        .fold(0.0, f64::max);
    for GroupTotal { key, total } in &view.value_by_category {
        let _ = writeln!(out, "  {:<24} {:>14.2}  {}", key, total, bar(*total, max));
    }
    if view.value_by_category.is_empty() {
        out.push_str("  (no inventory)\n");
    }

    section(&mut out, "Supplier Performance");
    for (rank, s) in view.supplier_ranking.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}. {:<24} {:>6.1} days  {:?}",
            rank + 1,
            s.name,
            s.average_delivery_time,
            s.band
        );
    }
    if view.supplier_ranking.is_empty() {
        out.push_str("  (no suppliers)\n");
    }

    section(&mut out, "Low Stock Watch List");
    if view.watch_list.is_empty() {
        let _ = writeln!(out, "  All stock above {} units.", view.low_stock_threshold);
    }
    for entry in &view.watch_list.entries {
        let _ = writeln!(out, "  - {:<28} {} units", entry.label, entry.quantity);
    }
    if view.watch_list.remaining > 0 {
        let _ = writeln!(out, "  ... and {} more", view.watch_list.remaining);
    }

    if !degraded.is_empty() {
        let names: Vec<String> = degraded.iter().map(Endpoint::to_string).collect();
        let _ = writeln!(out, "\nDegraded endpoints: {}", names.join(", "));
    }
    out
}

/// Failures a second run can clear get a hint on how to retry.
fn retry_hint(err: DashboardError) -> anyhow::Error {
    if err.is_retryable() {
        anyhow::anyhow!("{err}\nRun `supplydash dashboard` again to retry.")
    } else {
        err.into()
    }
}

fn section(out: &mut String, title: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    let _ = writeln!(out, "{}\n{}", title, "-".repeat(title.len()));
}

fn status_panel(out: &mut String, rows: &[StatusCount]) {
    let max = rows.iter().map(|r| r.count).max().unwrap_or(0);
    for row in rows {
        let badge = match StatusTone::of(&row.status) {
            StatusTone::Good => "+",
            StatusTone::Pending => "~",
            StatusTone::Attention => "!",
            StatusTone::Neutral => " ",
        };
        let _ = writeln!(
            out,
            "{} {:<22} {:>6}  {}",
            badge,
            row.status,
            row.count,
            bar(row.count as f64, max as f64)
        );
    }
    if rows.is_empty() {
        out.push_str("  (none)\n");
    }
}

/// Horizontal bar proportional to `value / max`.
fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.min(BAR_WIDTH))
}

#[cfg(test)]
mod tests {
    use supplydash_model::Dataset;

    use super::*;

    fn dataset() -> Dataset {
        serde_json::from_str(
            r#"{
                "orders": [
                    {"id":1,"status":"Processing","quantity":1200},
                    {"id":2,"status":"Delivered","quantity":34},
                    {"id":3,"status":"Processing","quantity":0}
                ],
                "inventories": [
                    {"id":1,"quantity":5,"item":{"id":1,"name":"Valve","category":"Parts","price":2.0},"warehouse":{"id":1,"name":"North"}},
                    {"id":2,"quantity":95,"item":{"id":2,"name":"Pump","category":"Parts","price":10.0},"warehouse":{"id":1,"name":"North"}},
                    {"id":3,"quantity":7}
                ],
                "shipments": [{"id":1,"status":"Shipped"}],
                "suppliers": [
                    {"id":1,"name":"Slowpoke","averageDeliveryTime":9.0},
                    {"id":2,"name":"Quick","averageDeliveryTime":2.0}
                ],
                "items": [],
                "warehouses": []
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_render_panels() {
        let view = DashboardView::build(&dataset(), 20);
        let text = render(&view, &[]);

        assert!(text.starts_with("Overview\n--------\n"));
        assert!(text.contains("  Total Orders                3  1,234 units"));
        assert!(text.contains("! Low Stock Alerts            2  2 items to reorder"));
        assert!(text.contains("! Processing                  2  ##############################"));
        assert!(text.contains("+ Delivered                   1  ###############"));
        assert!(text.contains("  North                         100 units  #"));
        assert!(text.contains("Unknown Warehouse"));
        assert!(text.find("Quick").unwrap() < text.find("Slowpoke").unwrap());
        assert!(text.contains("- Item ID: 3"));
        assert!(!text.contains("Degraded endpoints"));
    }

    #[test]
    fn test_render_empty_and_degraded() {
        let view = DashboardView::build(&Dataset::default(), 20);
        let text = render(&view, &[Endpoint::Suppliers]);

        assert!(text.contains("  Active Suppliers            0  In Good Standing"));
        assert!(text.contains("(no suppliers)"));
        assert!(text.contains("All stock above 20 units."));
        assert!(text.ends_with("Degraded endpoints: suppliers\n"));
    }

    #[test]
    fn test_degraded_load_reports_no_error() {
        let mut data = dataset();
        data.suppliers.clear();
        let view = DashboardView::build(&data, 20);
        let text = render(&view, &[Endpoint::Suppliers]);

        let lower = text.to_lowercase();
        assert!(!lower.contains("error"));
        assert!(!lower.contains("fail"));
        assert!(text.contains("  Active Suppliers            0  In Good Standing"));
        assert!(text.contains("  Total Orders                3  1,234 units"));
    }

    #[test]
    fn test_join_failure_offers_retry() {
        let err = retry_hint(DashboardError::AggregateFetchFailure("task 2 panicked".into()));
        let text = err.to_string();
        assert!(text.starts_with("error fetching dashboard data: task 2 panicked"));
        assert!(text.ends_with("Run `supplydash dashboard` again to retry."));

        let err = retry_hint(DashboardError::Config(supplydash_core::ConfigError::ZeroAttempts));
        assert!(!err.to_string().contains("again"));
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(5.0, 10.0).len(), 15);
        assert_eq!(bar(10.0, 10.0).len(), BAR_WIDTH);
        assert_eq!(bar(-3.0, 10.0), "");
        assert_eq!(bar(3.0, 0.0), "");
    }
}
