use web_sys::{window, Storage};

use crate::error::{ClientError, Result};
use crate::state::KeyValueStore;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage`, values stored as raw strings so pages written in
/// plain JS can share the same keys
#[derive(Debug, Clone, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<Storage> {
        get_local_storage().ok_or_else(|| ClientError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| ClientError::Storage(format!("could not write {}", key)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| ClientError::Storage(format!("could not remove {}", key)))
    }
}
