//! Resilient HTTP client for the supply-chain backend.
//!
//! [`Fetcher`] issues GETs through a pluggable [`Transport`] and retries
//! failed attempts with exponential backoff ([`RetryPolicy`]).
//! [`SupplyClient`] fans out one fetch per [`Endpoint`] and joins them into a
//! [`supplydash_model::Dataset`], degrading failed endpoints to empty
//! collections.
//!
//! # Usage
//!
//! ```ignore
//! use supplydash_client::{RetryPolicy, SupplyClient};
//!
//! let client = SupplyClient::new("http://localhost:8080/api", RetryPolicy::default());
//! let outcome = client.fetch_all().await?;
//! println!("{} orders", outcome.dataset.orders.len());
//! ```

mod endpoint;
mod error;
mod fetch;
mod retry;
mod supply;
mod transport;

pub use endpoint::Endpoint;
pub use error::{ApiError, FetchExhausted, UnknownEndpoint};
pub use fetch::Fetcher;
pub use retry::RetryPolicy;
pub use supply::{EndpointProbe, FetchOutcome, SupplyClient};
pub use transport::{HttpTransport, Transport};
