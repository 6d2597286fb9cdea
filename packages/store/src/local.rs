//! # `localStorage` key-value store: browser-side persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. It is
//! a zero-size handle that looks up `window.localStorage` on every call, so it
//! is `Clone`/`Copy` and never holds a JS reference across awaits.
//!
//! ## Error handling
//!
//! Storage can be missing (privacy modes), full (quota) or throw on access.
//! Every such failure is logged at `warn` and otherwise ignored: reads return
//! `None`, writes are dropped. The server stays authoritative for anything
//! that matters.

use web_sys::Storage;

use crate::kv::KeyValueStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = Self::storage()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("localStorage read of {key} failed: {:?}", e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!("localStorage write of {key} failed: {:?}", e);
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!("localStorage delete of {key} failed: {:?}", e);
        }
    }
}
