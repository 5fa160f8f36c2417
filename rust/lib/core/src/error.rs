use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Presentation layers match on
// these, never on the human-readable message.

pub mod error_code {
    pub const AGGREGATE_FETCH_FAILURE: &str = "AGGREGATE_FETCH_FAILURE";
    pub const REFRESH_IN_PROGRESS: &str = "REFRESH_IN_PROGRESS";
    pub const INVALID_CONFIG: &str = "INVALID_CONFIG";
}

// ── DashboardError ──────────────────────────────────────────────────

/// Pipeline-level failure, visible to whoever drives the dashboard.
///
/// A single endpoint failing is not one of these: it degrades to an empty
/// collection inside the load.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The fetch join itself failed. The dashboard is left in `Failed`
    /// and may be retried.
    #[error("error fetching dashboard data: {0}")]
    AggregateFetchFailure(String),

    /// Another refresh is still running.
    #[error("a dashboard refresh is already in progress")]
    RefreshInProgress,

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl DashboardError {
    pub fn error_code(&self) -> &'static str {
        match self {
            DashboardError::AggregateFetchFailure(_) => error_code::AGGREGATE_FETCH_FAILURE,
            DashboardError::RefreshInProgress => error_code::REFRESH_IN_PROGRESS,
            DashboardError::Config(_) => error_code::INVALID_CONFIG,
        }
    }

    /// Whether calling `refresh` again can succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, DashboardError::Config(_))
    }
}

// ── ConfigError ─────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base URL is empty")]
    EmptyBaseUrl,

    #[error("base URL must start with http:// or https://: {0}")]
    UnsupportedScheme(String),

    #[error("max attempts must be at least 1")]
    ZeroAttempts,

    #[error("low-stock threshold must not be negative: {0}")]
    NegativeThreshold(i64),

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_mapping() {
        assert_eq!(
            DashboardError::AggregateFetchFailure("x".into()).error_code(),
            "AGGREGATE_FETCH_FAILURE"
        );
        assert_eq!(DashboardError::RefreshInProgress.error_code(), "REFRESH_IN_PROGRESS");
        assert_eq!(
            DashboardError::Config(ConfigError::ZeroAttempts).error_code(),
            "INVALID_CONFIG"
        );
    }

    #[test]
    fn retryable() {
        assert!(DashboardError::AggregateFetchFailure("x".into()).is_retryable());
        assert!(DashboardError::RefreshInProgress.is_retryable());
        assert!(!DashboardError::Config(ConfigError::EmptyBaseUrl).is_retryable());
    }

    #[test]
    fn display_carries_trigger_message() {
        let err = DashboardError::AggregateFetchFailure("task 3 panicked".into());
        assert_eq!(err.to_string(), "error fetching dashboard data: task 3 panicked");
    }
}
