//! Raw string key-value stores.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::CacheError;

/// A string key-value store.
///
/// Implementations are synchronous: a `set` has reached the store when it
/// returns.
pub trait KeyValueStore {
    /// Get the raw value under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Set the raw value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove `key`. Removing a missing key succeeds.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check if a key exists in the store.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-memory store.
///
/// Clones share the same entries, so a test can keep a handle and inspect
/// what the storefront persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.lock() {
            entries.insert(key.into(), value.into());
        }
        store
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, CacheError> {
        self.entries
            .lock()
            .map_err(|_| CacheError::StoreError("memory store lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// The browser's `localStorage`.
///
/// The storage handle is looked up on every call, so the type is a plain
/// marker and can live in `Send + Sync` state.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    /// Create a handle to `window.localStorage`.
    pub fn new() -> Self {
        Self
    }

    #[cfg(target_arch = "wasm32")]
    fn storage() -> Result<web_sys::Storage, CacheError> {
        let window =
            web_sys::window().ok_or_else(|| CacheError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|_| CacheError::Unavailable("localStorage threw".to_string()))?
            .ok_or_else(|| CacheError::Unavailable("localStorage disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| CacheError::StoreError(format!("getItem({key}) failed: {e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| CacheError::StoreError(format!("setItem({key}) failed: {e:?}")))
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| CacheError::StoreError(format!("removeItem({key}) failed: {e:?}")))
    }
}

// Non-WASM builds have no localStorage
#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for LocalStore {
    fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Err(CacheError::Unavailable("localStorage requires wasm32".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), CacheError> {
        Err(CacheError::Unavailable("localStorage requires wasm32".to_string()))
    }

    fn delete(&self, _key: &str) -> Result<(), CacheError> {
        Err(CacheError::Unavailable("localStorage requires wasm32".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_shares_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.set("cart", "[]").unwrap();
        assert_eq!(handle.get("cart").unwrap().as_deref(), Some("[]"));
        assert!(handle.exists("cart").unwrap());

        handle.delete("cart").unwrap();
        assert!(store.get("cart").unwrap().is_none());
        store.delete("cart").unwrap();
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_local_store_unavailable_off_wasm() {
        let store = LocalStore::new();
        assert!(matches!(store.get("cart"), Err(CacheError::Unavailable(_))));
    }
}
