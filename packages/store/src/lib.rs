pub mod keys;
pub mod kv;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_storage::WebSessionStore;

pub use kv::{load_json, save_json, KeyValueStore};
