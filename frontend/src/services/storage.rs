//! `localStorage` adapter for the shared [`KeyValueStore`] trait.

use anyhow::{anyhow, Result};
use shared::KeyValueStore;
use web_sys::Storage;

/// Stateless handle; every call looks up `window.localStorage` afresh
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage(&self) -> Result<Storage> {
        web_sys::window()
            .ok_or_else(|| anyhow!("No window available"))?
            .local_storage()
            .map_err(|e| anyhow!("localStorage is not accessible: {:?}", e))?
            .ok_or_else(|| anyhow!("localStorage is disabled"))
    }
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| anyhow!("Failed to read '{}': {:?}", key, e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| anyhow!("Failed to write '{}': {:?}", key, e))
    }
}
