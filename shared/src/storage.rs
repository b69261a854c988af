//! # Storage Traits
//!
//! Key/value storage abstraction used by the booking and cart repositories.
//! The browser build backs it with `localStorage`; tests and non-browser
//! hosts use [`MemoryStore`].
//!
//! Collections are always rewritten wholesale. There is no versioning or
//! locking, so two tabs writing the same key race and the last write wins.

use anyhow::Result;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::HashMap;

/// Trait defining the interface for string key/value storage
///
/// Mirrors the shape of the browser's `Storage` API so the frontend
/// implementation stays a thin adapter.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`, if any
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

/// In-memory store, single threaded like the browser storage it stands in for
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load a JSON list stored under `key`.
///
/// Missing, unreadable, `null` or malformed data all yield an empty list.
/// Nothing here is surfaced to the user.
pub fn load_json_list<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = match store.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("Failed to read '{}' from storage, treating as empty: {}", key, e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<Option<Vec<T>>>(&raw) {
        Ok(list) => list.unwrap_or_default(),
        Err(e) => {
            warn!("Stored value for '{}' is malformed, treating as empty: {}", key, e);
            Vec::new()
        }
    }
}

/// Serialize `items` and replace whatever is stored under `key`
pub fn save_json_list<T, S>(store: &S, key: &str, items: &[T]) -> Result<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(items)?;
    store.set_item(key, &raw)
}
