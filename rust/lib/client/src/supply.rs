use std::sync::Arc;

use serde::Serialize;
use supplydash_model::{Dataset, Entity, InventoryRecord, Item, Order, Shipment, Supplier, Warehouse};
use tokio::task::{JoinError, JoinHandle};
use tracing::{info, warn};

use crate::endpoint::Endpoint;
use crate::error::FetchExhausted;
use crate::fetch::Fetcher;
use crate::retry::RetryPolicy;
use crate::transport::Transport;

/// Result of one full load: the collections plus the endpoints that were
/// replaced by empty collections after exhausting their retries.
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    pub dataset: Dataset,
    pub degraded: Vec<Endpoint>,
}

/// Reachability of one endpoint, as reported by [`SupplyClient::probe`].
#[derive(Debug, Clone, Serialize)]
pub struct EndpointProbe {
    pub endpoint: String,
    pub url: String,
    /// Number of records returned, or `None` when the request failed.
    pub records: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EndpointProbe {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Client for the six supply-chain collections under one API base URL.
#[derive(Clone)]
pub struct SupplyClient {
    base_url: String,
    fetcher: Fetcher,
}

impl SupplyClient {
    /// HTTP client for `base_url` (e.g. `http://localhost:8080/api`).
    pub fn new(base_url: impl Into<String>, policy: RetryPolicy) -> Self {
        Self::with_fetcher(base_url, Fetcher::http(policy))
    }

    pub fn with_transport(
        base_url: impl Into<String>,
        transport: Arc<dyn Transport>,
        policy: RetryPolicy,
    ) -> Self {
        Self::with_fetcher(base_url, Fetcher::new(transport, policy))
    }

    pub fn with_fetcher(base_url: impl Into<String>, fetcher: Fetcher) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            fetcher,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one collection with retries.
    pub async fn list<T: Entity>(&self) -> Result<Vec<T>, FetchExhausted> {
        let url = format!("{}/{}", self.base_url, T::COLLECTION);
        self.fetcher.fetch_with_retry(&url).await
    }

    /// Fetch all six collections concurrently and wait for every one to settle.
    ///
    /// Each fetch runs in its own task and fills its own slot of the
    /// [`Dataset`]. An exhausted endpoint becomes an empty collection and is
    /// listed in [`FetchOutcome::degraded`]. Only a task that dies without
    /// producing a result (panic, runtime shutdown) fails the whole join.
    pub async fn fetch_all(&self) -> Result<FetchOutcome, JoinError> {
        let orders = self.spawn_list::<Order>();
        let inventories = self.spawn_list::<InventoryRecord>();
        let shipments = self.spawn_list::<Shipment>();
        let suppliers = self.spawn_list::<Supplier>();
        let items = self.spawn_list::<Item>();
        let warehouses = self.spawn_list::<Warehouse>();

        let (orders, inventories, shipments, suppliers, items, warehouses) =
            tokio::join!(orders, inventories, shipments, suppliers, items, warehouses);

        let mut degraded = Vec::new();
        let dataset = Dataset {
            orders: settle(Endpoint::Orders, orders?, &mut degraded),
            inventories: settle(Endpoint::Inventories, inventories?, &mut degraded),
            shipments: settle(Endpoint::Shipments, shipments?, &mut degraded),
            suppliers: settle(Endpoint::Suppliers, suppliers?, &mut degraded),
            items: settle(Endpoint::Items, items?, &mut degraded),
            warehouses: settle(Endpoint::Warehouses, warehouses?, &mut degraded),
        };

        if degraded.is_empty() {
            info!("loaded all {} endpoints from {}", Endpoint::ALL.len(), self.base_url);
        } else {
            info!(
                "loaded {} of {} endpoints from {} (degraded: {:?})",
                Endpoint::ALL.len() - degraded.len(),
                Endpoint::ALL.len(),
                self.base_url,
                degraded
            );
        }

        Ok(FetchOutcome { dataset, degraded })
    }

    /// One attempt per endpoint, no retries. Reports what came back.
    pub async fn probe(&self) -> Vec<EndpointProbe> {
        let fetcher = self.fetcher.with_policy(RetryPolicy::single_attempt());
        let mut probes = Vec::with_capacity(Endpoint::ALL.len());
        for endpoint in Endpoint::ALL {
            let url = endpoint.url(&self.base_url);
            let result = fetcher.fetch_with_retry::<serde_json::Value>(&url).await;
            let (records, error) = match result {
                Ok(rows) => (Some(rows.len()), None),
                Err(e) => (None, Some(e.source.to_string())),
            };
            probes.push(EndpointProbe {
                endpoint: endpoint.to_string(),
                url,
                records,
                error,
            });
        }
        probes
    }

    fn spawn_list<T: Entity>(&self) -> JoinHandle<Result<Vec<T>, FetchExhausted>> {
        let client = self.clone();
        tokio::spawn(async move { client.list::<T>().await })
    }
}

/// Unwrap one endpoint's result, substituting an empty collection on failure.
fn settle<T>(
    endpoint: Endpoint,
    result: Result<Vec<T>, FetchExhausted>,
    degraded: &mut Vec<Endpoint>,
) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(e) => {
            warn!("{endpoint} degraded to an empty collection: {e}");
            degraded.push(endpoint);
            Vec::new()
        }
    }
}
