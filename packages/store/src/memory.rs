use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing and non-browser builds.
///
/// Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("token").is_none());

        store.set("token", "abc");
        assert_eq!(store.get("token").as_deref(), Some("abc"));

        store.set("token", "def");
        assert_eq!(store.get("token").as_deref(), Some("def"));
        assert_eq!(store.len(), 1);

        store.remove("token");
        assert!(store.get("token").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_clones_share_slots() {
        let store = MemoryStore::new();
        let other = store.clone();

        other.set("lang", "en");
        assert_eq!(store.get("lang").as_deref(), Some("en"));
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let store = MemoryStore::new();
        store.remove("nothing");
        assert!(store.is_empty());
    }
}
