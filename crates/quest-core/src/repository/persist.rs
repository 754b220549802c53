//! JSON persistence
//!
//! Storage failures never reach the user: loads fall back to the default
//! state and saves are logged and dropped.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::traits::{StateStore, StoreResult};

fn try_load<T: DeserializeOwned>(store: &impl StateStore, key: &str) -> StoreResult<Option<T>> {
    match store.get_item(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

fn try_save<T: Serialize>(store: &impl StateStore, key: &str, value: &T) -> StoreResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set_item(key, &raw)
}

/// Load the state under `key`, or `T::default()` if it is missing or unreadable
pub fn load_or_default<T>(store: &impl StateStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match try_load(store, key) {
        Ok(Some(value)) => {
            log::debug!("Loaded state from {}", key);
            value
        }
        Ok(None) => {
            log::debug!("No stored state under {}, starting fresh", key);
            T::default()
        }
        Err(e) => {
            log::warn!("Could not load {}, using defaults: {}", key, e);
            T::default()
        }
    }
}

/// Persist `value` under `key`. Returns whether the write succeeded.
pub fn save<T: Serialize>(store: &impl StateStore, key: &str, value: &T) -> bool {
    match try_save(store, key, value) {
        Ok(()) => true,
        Err(e) => {
            log::error!("Could not save {}: {}", key, e);
            false
        }
    }
}
