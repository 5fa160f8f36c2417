use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Backend primary key (a JPA `Long`).
pub type EntityId = i64;

/// A record type served by one backend collection endpoint.
///
/// `COLLECTION` is the path segment under the API base URL,
/// e.g. `orders` for `GET {base}/orders`.
pub trait Entity: DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: &'static str;
}

/// Records that carry a free-text `status` label.
pub trait HasStatus {
    fn status(&self) -> &str;
}

/// Deserialize `null` as `T::default()`. Pair with `#[serde(default)]` so a
/// missing key behaves the same way.
pub(crate) fn nullable<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

/// `Some(s)` unless the label is empty; empty labels count as unresolved.
pub(crate) fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}
