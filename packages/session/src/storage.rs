//! # Origin-scoped key-value storage
//!
//! [`KeyValueStore`] is the seam between the session core and whatever durable
//! storage the platform offers. All three operations are synchronous and never
//! fail from the caller's point of view: a read of a missing key is `None`, and
//! a write the platform refuses is logged and dropped.
//!
//! | Implementation | Platform |
//! |----------------|----------|
//! | [`MemoryStorage`] | Native builds and tests. Lives as long as the process. |
//! | [`LocalStorage`](crate::LocalStorage) | Browser (`wasm32` + `web` feature), backed by `window.localStorage`. |
//!
//! Use [`platform_storage`] to get the right one for the current target.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// In-memory KeyValueStore for tests and native fallback.
///
/// Clones share the same map, so a clone handed to the HTTP client sees the
/// token the session store wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Which half of a [`KeyValueStore`] mutation a backend failed.
#[cfg(any(test, all(target_arch = "wasm32", feature = "web")))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StorageOp {
    Write,
    Remove,
}

/// Report the outcome of a backend mutation. A refused write or removal is
/// logged as a warning; returns whether the mutation went through.
#[cfg(any(test, all(target_arch = "wasm32", feature = "web")))]
pub(crate) fn storage_outcome<E: std::fmt::Debug>(
    result: Result<(), E>,
    op: StorageOp,
    key: &str,
) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            match op {
                StorageOp::Write => tracing::warn!("storage refused write of {key}: {e:?}"),
                StorageOp::Remove => tracing::warn!("storage refused removal of {key}: {e:?}"),
            }
            false
        }
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = crate::LocalStorage;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStorage = MemoryStorage;

/// Create the platform-appropriate storage.
///
/// - **Web** (WASM + `web` feature): `window.localStorage`
/// - **Everything else**: a fresh [`MemoryStorage`]
pub fn platform_storage() -> PlatformStorage {
    PlatformStorage::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key_is_none() {
        let storage = MemoryStorage::new();
        assert!(storage.get("nope").is_none());
    }

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        storage.set("jwt", "T");
        assert_eq!(storage.get("jwt").as_deref(), Some("T"));

        storage.set("jwt", "U");
        assert_eq!(storage.get("jwt").as_deref(), Some("U"));

        storage.remove("jwt");
        assert!(storage.get("jwt").is_none());

        // Removing again is harmless
        storage.remove("jwt");
        assert!(storage.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set("user", "{}");
        assert_eq!(other.get("user").as_deref(), Some("{}"));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn test_refused_removal_is_reported() {
        assert!(storage_outcome(Ok::<(), ()>(()), StorageOp::Remove, "jwt"));
        assert!(!storage_outcome(Err("quota"), StorageOp::Remove, "jwt"));
        assert!(!storage_outcome(Err("quota"), StorageOp::Write, "user"));
    }
}
