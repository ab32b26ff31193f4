//! # Filesystem-backed session store
//!
//! [`FileStore`] keeps each key in its own file under a base directory. Native builds
//! use it so a "stay signed in" session survives an app restart.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── user            # serialized user snapshot
//! ├── session         # serialized session object
//! └── staySignedIn    # "true" when present
//! ```
//!
//! Keys are sanitised to `[A-Za-z0-9_-]` before being used as file names.

use std::path::PathBuf;

use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base.join(name)
    }

    /// Delete every stored entry.
    pub fn clear(&self) {
        let _ = std::fs::remove_dir_all(&self.base);
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    async fn set(&self, key: &str, value: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.entry_path(key), value);
    }

    async fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}
