//! # Browser `sessionStorage` store
//!
//! [`WebSessionStore`] is the [`KeyValueStore`] used on the web platform. Values live
//! in `window.sessionStorage`, so they are scoped to the tab and dropped when it closes.
//! Errors (storage disabled, quota exceeded) are swallowed like every other store.

use crate::kv::KeyValueStore;

/// `window.sessionStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct WebSessionStore;

impl WebSessionStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok()?
    }
}

impl KeyValueStore for WebSessionStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    async fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    async fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
