//! In-memory session storage

use std::collections::HashMap;

use super::{SessionStorage, StorageError};

/// `HashMap`-backed storage, dropped with the session.
///
/// An optional quota mimics the browser limit on session storage; writes that
/// would exceed it fail with [`StorageError::QuotaExceeded`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes once keys plus values exceed `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota_bytes: Some(bytes),
            ..Self::default()
        }
    }

    /// Number of successful `set` calls
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota_bytes {
            let len = key.len() + value.len();
            if self.used_bytes_without(key) + len > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    len,
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", "v1").unwrap();
        storage.set("k", "v2").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(storage.write_count(), 2);

        storage.remove("k").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn quota_rejects_oversized_writes() {
        let mut storage = MemoryStorage::with_quota(8);
        storage.set("k", "1234").unwrap();
        let err = storage.set("other", "1234").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));

        // Replacing an existing key only counts the new value
        storage.set("k", "1234567").unwrap();
        assert_eq!(storage.len(), 1);
    }
}
