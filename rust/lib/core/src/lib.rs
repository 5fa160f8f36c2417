//! Dashboard pipeline: configuration, load state and refresh.
//!
//! A [`Dashboard`] starts `Idle`; [`Dashboard::refresh`] moves it through
//! `Loading` to `Ready` (with a fresh [`Snapshot`]) or `Failed`.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod state;

pub use config::DashboardConfig;
pub use error::{ConfigError, DashboardError};
pub use pipeline::Dashboard;
pub use state::{LoadState, Snapshot};
