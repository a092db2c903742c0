//! Type-safe key-value storage adapter for the Shopfront storefront.
//!
//! Provides a small, ergonomic API for keeping JSON values in a string
//! key-value store: the browser's `localStorage` on wasm32, or an in-memory
//! store for native builds and tests.
//!
//! # Example
//!
//! ```
//! use shopfront_cache::{Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! // Store a value
//! cache.set("cart", &vec!["Widget".to_string()]).unwrap();
//!
//! // Retrieve a value
//! let cart: Option<Vec<String>> = cache.get("cart").unwrap();
//! assert_eq!(cart.unwrap(), vec!["Widget".to_string()]);
//!
//! // Delete a value
//! cache.delete("cart").unwrap();
//! assert!(!cache.exists("cart").unwrap());
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{KeyValueStore, LocalStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, KeyValueStore, LocalStore, MemoryStore};
}
