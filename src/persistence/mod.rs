//! Persistence module - Session-scoped key-value storage and the navigation snapshot

mod database;
mod memory;
mod snapshot;

use std::path::PathBuf;

use thiserror::Error;

pub use database::SqliteStorage;
pub use memory::MemoryStorage;
pub use snapshot::{load_preferences, save_navigation, PersistedNavigation};

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(#[from] rusqlite::Error),

    #[error("failed to create storage directory {path:?}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage quota exceeded writing {len} bytes to '{key}'")]
    QuotaExceeded { key: String, len: usize },
}

/// Errors raised while saving or restoring the navigation snapshot
#[derive(Debug, Error)]
pub enum PersistError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("malformed navigation state: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Key-value surface with the lifetime of one shell session
pub trait SessionStorage {
    /// Read the value under `key`
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key` if present
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<T: SessionStorage + ?Sized> SessionStorage for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
