use serde::Serialize;
use supplydash_model::Dataset;

use crate::group::{stock_by_warehouse, value_by_category, GroupTotal};
use crate::metrics::{metric_summary, MetricSummary};
use crate::status::{status_distribution, StatusCount};
use crate::stock::{watch_list, WatchList, WATCH_LIST_LIMIT};
use crate::supplier::{supplier_ranking, SupplierRank};

/// Everything the dashboard screen shows, derived from one [`Dataset`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub low_stock_threshold: i64,
    pub metrics: MetricSummary,
    pub order_status: Vec<StatusCount>,
    pub shipment_status: Vec<StatusCount>,
    pub stock_by_warehouse: Vec<GroupTotal<i64>>,
    pub value_by_category: Vec<GroupTotal<f64>>,
    pub supplier_ranking: Vec<SupplierRank>,
    pub watch_list: WatchList,
}

impl DashboardView {
    pub fn build(data: &Dataset, low_stock_threshold: i64) -> Self {
        Self {
            low_stock_threshold,
            metrics: metric_summary(data, low_stock_threshold),
            order_status: status_distribution(&data.orders),
            shipment_status: status_distribution(&data.shipments),
            stock_by_warehouse: stock_by_warehouse(&data.inventories),
            value_by_category: value_by_category(&data.inventories),
            supplier_ranking: supplier_ranking(&data.suppliers),
            watch_list: watch_list(&data.inventories, low_stock_threshold, WATCH_LIST_LIMIT),
        }
    }
}
