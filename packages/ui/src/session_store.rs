//! Platform session storage for [`api::SessionManager`].
//!
//! - **Web** (WASM + `web` feature): the tab's `sessionStorage` via [`store::WebSessionStore`]
//! - **Native**: files under `<data_dir>/schoolmoney/session` via [`store::FileStore`]

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::WebSessionStore;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;

pub fn make_session_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::WebSessionStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("schoolmoney")
            .join("session");
        store::FileStore::new(base)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
}
