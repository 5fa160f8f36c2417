use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, FetchExhausted};
use crate::retry::RetryPolicy;
use crate::transport::{HttpTransport, Transport};

/// GET-with-retry over a [`Transport`].
#[derive(Clone)]
pub struct Fetcher {
    transport: Arc<dyn Transport>,
    policy: RetryPolicy,
}

impl Fetcher {
    pub fn new(transport: Arc<dyn Transport>, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    /// Fetcher over a fresh [`HttpTransport`].
    pub fn http(policy: RetryPolicy) -> Self {
        Self::new(Arc::new(HttpTransport::new()), policy)
    }

    /// Same transport, different policy.
    pub fn with_policy(&self, policy: RetryPolicy) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            policy,
        }
    }

    /// GET `url` and decode the body as a JSON array of `T`.
    ///
    /// A non-2xx status, a network error or an undecodable body each count
    /// as one failed attempt. After `max_attempts` failures the last cause is
    /// returned inside [`FetchExhausted`].
    pub async fn fetch_with_retry<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<Vec<T>, FetchExhausted> {
        let max_attempts = self.policy.max_attempts();
        let mut attempt = 1;
        loop {
            match self.attempt::<T>(url).await {
                Ok(records) => {
                    debug!("fetched {} records from {url} (attempt {attempt})", records.len());
                    return Ok(records);
                }
                Err(e) => {
                    debug!("attempt {attempt}/{max_attempts} failed for {url}: {e}");
                    if attempt >= max_attempts {
                        return Err(FetchExhausted {
                            url: url.to_string(),
                            attempts: attempt,
                            source: e,
                        });
                    }
                    tokio::time::sleep(self.policy.delay_for_retry(attempt - 1)).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn attempt<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, ApiError> {
        let body = self.transport.get(url).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(format!("response body: {e}")))
    }
}
