use std::time::Duration;

use serde::{Deserialize, Serialize};
use supplydash_aggregate::DEFAULT_LOW_STOCK_THRESHOLD;
use supplydash_client::RetryPolicy;

use crate::error::ConfigError;

/// Environment variable overriding [`DashboardConfig::base_url`].
pub const ENV_BASE_URL: &str = "SUPPLYDASH_BASE_URL";
/// Environment variable overriding [`DashboardConfig::low_stock_threshold`].
pub const ENV_LOW_STOCK_THRESHOLD: &str = "SUPPLYDASH_LOW_STOCK_THRESHOLD";
/// Environment variable overriding [`DashboardConfig::max_attempts`].
pub const ENV_MAX_ATTEMPTS: &str = "SUPPLYDASH_MAX_ATTEMPTS";
/// Environment variable overriding [`DashboardConfig::initial_delay_ms`].
pub const ENV_INITIAL_DELAY_MS: &str = "SUPPLYDASH_INITIAL_DELAY_MS";

/// Settings for one dashboard pipeline.
///
/// Missing keys in a serialized config take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Backend API root, e.g. `http://localhost:8080/api`.
    pub base_url: String,

    /// Inventory at or below this quantity is low stock.
    pub low_stock_threshold: i64,

    /// GET attempts per endpoint before giving up.
    pub max_attempts: u32,

    /// Wait before the first retry; doubles on each further retry.
    pub initial_delay_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            max_attempts: 3,
            initial_delay_ms: 1000,
        }
    }
}

impl DashboardConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Check every field. Called before a pipeline is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(url.to_string()));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.low_stock_threshold < 0 {
            return Err(ConfigError::NegativeThreshold(self.low_stock_threshold));
        }
        Ok(())
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_millis(self.initial_delay_ms))
    }

    /// Override fields from `SUPPLYDASH_*` variables found through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_BASE_URL) {
            self.base_url = val;
        }
        if let Some(val) = lookup(ENV_LOW_STOCK_THRESHOLD) {
            self.low_stock_threshold = parse_env(ENV_LOW_STOCK_THRESHOLD, &val)?;
        }
        if let Some(val) = lookup(ENV_MAX_ATTEMPTS) {
            self.max_attempts = parse_env(ENV_MAX_ATTEMPTS, &val)?;
        }
        if let Some(val) = lookup(ENV_INITIAL_DELAY_MS) {
            self.initial_delay_ms = parse_env(ENV_INITIAL_DELAY_MS, &val)?;
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
