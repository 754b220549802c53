//! Repository Layer - Core Traits
//!
//! Key/value storage modelled on the browser Storage API.
//! Implementations can use localStorage, in-memory maps, etc.

use thiserror::Error;

pub type StoreResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage is disabled or not present
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A write was refused (quota exceeded, private mode, ...)
    #[error("storage write failed: {0}")]
    Write(String),

    /// Stored data could not be decoded or state could not be encoded
    #[error("corrupt state: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// String key/value store
pub trait StateStore {
    /// Read the value under `key`, `None` if absent
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write `value` under `key`
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete `key`; absent keys are not an error
    fn remove_item(&self, key: &str) -> StoreResult<()>;
}
