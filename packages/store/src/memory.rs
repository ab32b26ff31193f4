use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the stored keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let Ok(entries) = self.entries.lock() else {
            return Vec::new();
        };
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    async fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = MemoryStore::new();

        assert!(store.get(keys::USER).await.is_none());

        store.set(keys::USER, "{\"id\":1}").await;
        assert_eq!(store.get(keys::USER).await.as_deref(), Some("{\"id\":1}"));

        store.remove(keys::USER).await;
        assert!(store.get(keys::USER).await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        store
            .set(keys::STAY_SIGNED_IN, keys::STAY_SIGNED_IN_VALUE)
            .await;

        assert_eq!(
            other.get(keys::STAY_SIGNED_IN).await.as_deref(),
            Some("true")
        );
        assert_eq!(other.keys(), vec![keys::STAY_SIGNED_IN.to_string()]);
    }

    #[tokio::test]
    async fn test_overwrite_keeps_latest() {
        let store = MemoryStore::new();
        store.set(keys::SESSION, "first").await;
        store.set(keys::SESSION, "second").await;

        assert_eq!(store.get(keys::SESSION).await.as_deref(), Some("second"));
        assert_eq!(store.keys().len(), 1);
    }
}
