//! Storage - durable string key-value storage.
//!
//! Collections of records live as one JSON document per key, the same
//! shape a browser's local storage holds. The [`KeyValueStore`] trait is the
//! seam to whatever medium hosts the site.
//!
//! ## Example
//!
//! ```ignore
//! use yoloo_site::{InMemoryKeyValueStore, KeyValueStore};
//!
//! let store = InMemoryKeyValueStore::new();
//! store.set_item("yoloo_games", "[]".to_string())?;
//! assert_eq!(store.get_item("yoloo_games")?.as_deref(), Some("[]"));
//! ```

mod file;
mod in_memory;

use std::sync::Arc;

use crate::error::StorageError;

/// Abstract string storage keyed by name.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`. Returns None if the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: String) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

pub use file::FileKeyValueStore;
pub use in_memory::InMemoryKeyValueStore;
