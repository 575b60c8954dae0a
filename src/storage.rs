//! Key-Value Storage Layer
//!
//! Abstract interface over string key-value persistence. The browser
//! implementation wraps `window.localStorage`; an in-memory implementation
//! backs the tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Storage key for the guest todo collection
pub const TODOS_KEY: &str = "todo-app-todos";
/// Storage key for the persisted session
pub const SESSION_KEY: &str = "todo-app-session";
/// Storage key for the chosen theme
pub const THEME_KEY: &str = "todo-app-theme";

/// Synchronous string key-value store
///
/// Local storage is treated as always available: setters have no error
/// path, and a failed read is indistinguishable from an absent key.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage` backend
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn raw() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::raw().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(s) = Self::raw() {
            let _ = s.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(s) = Self::raw() {
            let _ = s.remove_item(key);
        }
    }
}

/// In-memory backend for tests; clones share the same map
#[derive(Clone, Default)]
pub struct MemoryStorage {
    map: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.map.borrow_mut().remove(key);
    }
}

/// Read and deserialize a JSON value; missing or corrupt data yields `None`
pub fn load_json<T: DeserializeOwned>(storage: &impl StorageBackend, key: &str) -> Option<T> {
    let raw = storage.get(key)?;
    serde_json::from_str(&raw).ok()
}

/// Serialize and store a JSON value
pub fn save_json<T: Serialize>(storage: &impl StorageBackend, key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        storage.set(key, &raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let storage = MemoryStorage::new();
        save_json(&storage, "k", &vec![1u32, 2, 3]);
        let back: Option<Vec<u32>> = load_json(&storage, "k");
        assert_eq!(back, Some(vec![1, 2, 3]));
    }

    #[test]
    fn corrupt_value_reads_as_none() {
        let storage = MemoryStorage::new();
        storage.set("k", "{not json");
        let back: Option<Vec<u32>> = load_json(&storage, "k");
        assert_eq!(back, None);
    }

    #[test]
    fn remove_clears_key() {
        let storage = MemoryStorage::new();
        storage.set("k", "v");
        storage.remove("k");
        assert_eq!(storage.get("k"), None);
    }
}
