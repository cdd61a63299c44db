//! # `window.localStorage`: browser-side session persistence
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. Keys
//! are scoped to the page origin by the browser itself and survive reloads.
//!
//! ## Connection management
//!
//! `LocalStorage` is a zero-size struct that looks up `window.localStorage` on
//! every operation. `web_sys::Storage` is not `Send`, and the lookup is cheap.
//!
//! ## Error handling
//!
//! Storage can be unavailable (private browsing, quota, disabled cookies). Reads
//! then return `None`, and writes and removals are dropped with a warning, so
//! the session degrades to "not signed in" instead of failing.

use crate::storage::{storage_outcome, KeyValueStore, StorageOp};

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, dropping write of {key}");
            return;
        };
        storage_outcome(storage.set_item(key, value), StorageOp::Write, key);
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, cannot remove {key}");
            return;
        };
        storage_outcome(storage.remove_item(key), StorageOp::Remove, key);
    }
}
