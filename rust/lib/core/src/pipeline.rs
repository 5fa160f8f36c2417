use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use supplydash_aggregate::DashboardView;
use supplydash_client::SupplyClient;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info, warn};

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::state::{LoadState, Snapshot};

/// Owns the load state of one dashboard and drives refreshes.
///
/// Refreshes are serialized: while one is in flight, another `refresh`
/// call returns [`DashboardError::RefreshInProgress`] and the running load
/// is left to finish and publish its result.
pub struct Dashboard {
    client: SupplyClient,
    low_stock_threshold: i64,
    state: RwLock<LoadState>,
    refresh_lock: Mutex<()>,
    generation: AtomicU64,
}

impl Dashboard {
    /// Validate `config` and build an HTTP-backed dashboard in `Idle`.
    pub fn new(config: &DashboardConfig) -> Result<Self, DashboardError> {
        config.validate()?;
        let client = SupplyClient::new(config.base_url.trim(), config.retry_policy());
        Ok(Self::with_client(client, config.low_stock_threshold))
    }

    pub fn with_client(client: SupplyClient, low_stock_threshold: i64) -> Self {
        Self {
            client,
            low_stock_threshold,
            state: RwLock::new(LoadState::Idle),
            refresh_lock: Mutex::new(()),
            generation: AtomicU64::new(0),
        }
    }

    pub fn client(&self) -> &SupplyClient {
        &self.client
    }

    pub fn low_stock_threshold(&self) -> i64 {
        self.low_stock_threshold
    }

    pub async fn state(&self) -> LoadState {
        self.state.read().await.clone()
    }

    /// Load every collection and rebuild the views.
    ///
    /// Endpoints that exhaust their retries load as empty collections and
    /// still end in `Ready`. Only a failure of the join itself ends in
    /// `Failed` and returns [`DashboardError::AggregateFetchFailure`].
    pub async fn refresh(&self) -> Result<Arc<Snapshot>, DashboardError> {
        let _guard = self
            .refresh_lock
            .try_lock()
            .map_err(|_| DashboardError::RefreshInProgress)?;

        self.set_state(LoadState::Loading).await;
        info!("dashboard refresh started ({})", self.client.base_url());

        match self.client.fetch_all().await {
            Ok(outcome) => {
                let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
                let view = DashboardView::build(&outcome.dataset, self.low_stock_threshold);
                let snapshot = Arc::new(Snapshot {
                    generation,
                    dataset: outcome.dataset,
                    view,
                    degraded: outcome.degraded,
                });
                self.set_state(LoadState::Ready(Arc::clone(&snapshot))).await;
                info!(
                    "dashboard ready (generation {generation}, {} degraded endpoints)",
                    snapshot.degraded.len()
                );
                Ok(snapshot)
            }
            Err(e) => {
                let message = e.to_string();
                error!("error fetching dashboard data: {message}");
                self.set_state(LoadState::Failed(message.clone())).await;
                Err(DashboardError::AggregateFetchFailure(message))
            }
        }
    }

    async fn set_state(&self, next: LoadState) {
        let mut state = self.state.write().await;
        if !state.can_transition_to(&next) {
            // A refresh future dropped mid-load leaves `Loading` behind.
            warn!("dashboard state {} -> {}", *state, next);
        }
        *state = next;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::AtomicBool;
    use std::time::Duration;

    use supplydash_client::{ApiError, Endpoint, RetryPolicy, Transport};
    use tokio::sync::Semaphore;

    use super::*;

    const BODIES: [(&str, &str); 6] = [
        ("orders", r#"[{"id":1,"status":"Processing","quantity":10},{"id":2,"status":"Delivered","quantity":5}]"#),
        ("inventories", r#"[{"id":1,"quantity":4,"item":{"id":1,"name":"Valve"}},{"id":2,"quantity":80}]"#),
        ("shipments", r#"[{"id":1,"status":"Shipped"}]"#),
        ("suppliers", r#"[{"id":1,"name":"Acme","averageDeliveryTime":5.0}]"#),
        ("items", r#"[{"id":1,"name":"Valve","category":"Parts","price":3.0}]"#),
        ("warehouses", r#"[{"id":1,"name":"Dock"}]"#),
    ];

    /// Fake backend. Paths in `down` always answer 500; `panic_once` makes
    /// the first request panic; `gate` holds every request until a permit
    /// is released.
    struct FakeBackend {
        bodies: HashMap<&'static str, &'static str>,
        down: Vec<&'static str>,
        panic_once: AtomicBool,
        gate: Option<Semaphore>,
    }

    impl FakeBackend {
        fn new() -> Self {
            Self {
                bodies: HashMap::from(BODIES),
                down: Vec::new(),
                panic_once: AtomicBool::new(false),
                gate: None,
            }
        }
    }

    #[async_trait::async_trait]
    impl Transport for FakeBackend {
        async fn get(&self, url: &str) -> Result<String, ApiError> {
            if let Some(gate) = &self.gate {
                gate.acquire().await.expect("gate closed").forget();
            }
            if self.panic_once.swap(false, Ordering::SeqCst) {
                panic!("transport bug");
            }
            let path = url.rsplit('/').next().unwrap_or_default();
            if self.down.iter().any(|d| *d == path) {
                return Err(ApiError::Server { status: 500, message: "boom".into() });
            }
            self.bodies
                .get(path)
                .map(|b| b.to_string())
                .ok_or(ApiError::Server { status: 404, message: String::new() })
        }
    }

    fn dashboard(backend: Arc<FakeBackend>) -> Dashboard {
        let client = SupplyClient::with_transport(
            "http://backend/api",
            backend,
            RetryPolicy::new(3, Duration::from_millis(1000)),
        );
        Dashboard::with_client(client, 20)
    }

    #[tokio::test(start_paused = true)]
    async fn idle_to_ready() {
        let dash = dashboard(Arc::new(FakeBackend::new()));
        assert!(matches!(dash.state().await, LoadState::Idle));

        let snapshot = dash.refresh().await.unwrap();
        assert_eq!(snapshot.generation, 1);
        assert_eq!(snapshot.view.metrics.total_orders.value, 2);
        assert_eq!(snapshot.view.metrics.total_units, 15);
        assert_eq!(snapshot.view.metrics.low_stock.value, 1);
        assert!(snapshot.view.metrics.low_stock.alert);
        assert_eq!(snapshot.view.watch_list.entries[0].label, "Valve");

        let state = dash.state().await;
        assert_eq!(state.name(), "ready");
        assert!(state.error().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn failing_suppliers_endpoint_still_ready() {
        let backend = FakeBackend {
            down: vec!["suppliers"],
            ..FakeBackend::new()
        };
        let dash = dashboard(Arc::new(backend));

        let snapshot = dash.refresh().await.unwrap();

        assert!(snapshot.dataset.suppliers.is_empty());
        assert_eq!(snapshot.degraded, vec![Endpoint::Suppliers]);
        assert_eq!(snapshot.view.metrics.suppliers.value, 0);
        assert!(snapshot.view.supplier_ranking.is_empty());
        assert_eq!(snapshot.dataset.orders.len(), 2);
        let state = dash.state().await;
        assert!(state.error().is_none());
        assert!(state.snapshot().is_some());
    }

    #[tokio::test]
    async fn join_failure_then_retry() {
        let backend = FakeBackend {
            panic_once: AtomicBool::new(true),
            ..FakeBackend::new()
        };
        let dash = dashboard(Arc::new(backend));

        let err = dash.refresh().await.unwrap_err();
        assert!(matches!(err, DashboardError::AggregateFetchFailure(_)));
        assert!(err.is_retryable());
        let state = dash.state().await;
        assert_eq!(state.name(), "failed");
        assert!(state.error().is_some());

        // Failed -> Loading -> Ready.
        let snapshot = dash.refresh().await.unwrap();
        assert_eq!(snapshot.generation, 1);
        assert_eq!(dash.state().await.name(), "ready");
    }

    #[tokio::test]
    async fn concurrent_refresh_is_rejected() {
        let backend = Arc::new(FakeBackend {
            gate: Some(Semaphore::new(0)),
            ..FakeBackend::new()
        });
        let dash = Arc::new(dashboard(backend.clone()));

        let running = {
            let dash = Arc::clone(&dash);
            tokio::spawn(async move { dash.refresh().await })
        };
        while !dash.state().await.is_loading() {
            tokio::task::yield_now().await;
        }

        let err = dash.refresh().await.unwrap_err();
        assert!(matches!(err, DashboardError::RefreshInProgress));

        if let Some(gate) = &backend.gate {
            gate.add_permits(Endpoint::ALL.len());
        }
        let snapshot = running.await.unwrap().unwrap();
        assert_eq!(snapshot.generation, 1);

        // Ready -> Loading -> Ready once the first load is done.
        if let Some(gate) = &backend.gate {
            gate.add_permits(Endpoint::ALL.len());
        }
        let again = dash.refresh().await.unwrap();
        assert_eq!(again.generation, 2);
    }

    #[test]
    fn new_validates_config() {
        let config = DashboardConfig {
            max_attempts: 0,
            ..Default::default()
        };
        let err = Dashboard::new(&config).err().unwrap();
        assert_eq!(err.error_code(), "INVALID_CONFIG");

        let dash = Dashboard::new(&DashboardConfig::default()).unwrap();
        assert_eq!(dash.client().base_url(), "http://localhost:8080/api");
        assert_eq!(dash.low_stock_threshold(), 20);
    }
}
