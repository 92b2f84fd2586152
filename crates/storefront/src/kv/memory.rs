//! In-memory key-value store.

use std::cell::RefCell;
use std::collections::HashMap;

use super::{KvStore, StorageError};

/// An in-memory [`KvStore`].
///
/// Used by tests and as the degraded non-persistent fallback when durable
/// storage is unavailable. An optional byte quota simulates the platform
/// limit so quota-exceeded paths can be exercised.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an unbounded in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a total byte quota across keys and values.
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            quota: Some(quota),
        }
    }

    /// Total bytes currently stored (keys plus values).
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(limit) = self.quota {
            let existing = self
                .entries
                .borrow()
                .get(key)
                .map_or(0, |v| key.len() + v.len());
            let used = self.used_bytes() - existing + key.len() + value.len();
            if used > limit {
                return Err(StorageError::QuotaExceeded { used, limit });
            }
        }
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
