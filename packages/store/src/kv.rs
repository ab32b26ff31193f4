//! # Key/value session storage
//!
//! [`KeyValueStore`] is the persistence seam used by the session layer. It models the
//! browser's `sessionStorage`: string keys, string values, no expiry of its own.
//!
//! | Implementation | Platform | Lifetime |
//! |----------------|----------|----------|
//! | [`MemoryStore`](crate::MemoryStore) | all (tests, fallback) | process |
//! | [`FileStore`](crate::FileStore) | native | until deleted |
//! | `WebSessionStore` | wasm + `web` feature | browser tab |
//!
//! Implementations swallow storage failures: a read that fails is `None`, a write that
//! fails is dropped. The server stays the source of truth, so losing the local copy only
//! costs a re-login.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Async trait for reading and writing string values by key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(&self, key: &str, value: &str) -> impl std::future::Future<Output = ()>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = ()>;
}

/// Read `key` and deserialize it from JSON. Missing or malformed values are `None`.
pub async fn load_json<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    let raw = store.get(key).await?;
    serde_json::from_str(&raw).ok()
}

/// Serialize `value` as JSON and store it under `key`.
pub async fn save_json<S, T>(store: &S, key: &str, value: &T)
where
    S: KeyValueStore,
    T: Serialize,
{
    if let Ok(raw) = serde_json::to_string(value) {
        store.set(key, &raw).await;
    }
}
