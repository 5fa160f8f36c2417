// ── Per-attempt errors ──────────────────────────────────────────────

/// Why a single GET attempt failed.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response. `message` is the response body, possibly empty.
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not a JSON array of the expected entity.
    #[error("decode: {0}")]
    Decode(String),
}

// ── Terminal errors ─────────────────────────────────────────────────

/// Every attempt against `url` failed. Carries the last attempt's cause.
#[derive(Debug, thiserror::Error)]
#[error("failed to fetch {url} after {attempts} attempt(s): {source}")]
pub struct FetchExhausted {
    pub url: String,
    pub attempts: u32,
    #[source]
    pub source: ApiError,
}

/// A resource name that does not match any backend collection.
#[derive(Debug, thiserror::Error)]
#[error("unknown resource type: {0}")]
pub struct UnknownEndpoint(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_message_names_url_and_cause() {
        let err = FetchExhausted {
            url: "http://api/orders".into(),
            attempts: 3,
            source: ApiError::Server { status: 503, message: "busy".into() },
        };
        assert_eq!(
            err.to_string(),
            "failed to fetch http://api/orders after 3 attempt(s): HTTP 503: busy"
        );
    }
}
