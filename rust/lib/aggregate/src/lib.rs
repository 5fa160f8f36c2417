//! Derived dashboard views over fetched supply-chain collections.
//!
//! Everything here is a pure function of its inputs: no I/O, inputs are
//! borrowed and never mutated. Unresolved references fall back to default
//! labels and empty inputs give empty outputs.

mod group;
mod metrics;
mod status;
mod stock;
mod supplier;
mod view;

pub use group::{stock_by_warehouse, sum_by_key, value_by_category, GroupTotal, UNCATEGORIZED, UNKNOWN_WAREHOUSE};
pub use metrics::{group_thousands, metric_summary, MetricCard, MetricKind, MetricSummary};
pub use status::{status_distribution, StatusCount, StatusTone};
pub use stock::{low_stock, watch_list, StockLevel, WatchEntry, WatchList, DEFAULT_LOW_STOCK_THRESHOLD, WATCH_LIST_LIMIT};
pub use supplier::{supplier_ranking, DeliveryBand, SupplierRank};
pub use view::DashboardView;
