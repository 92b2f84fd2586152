//! Persistent key-value store abstraction.
//!
//! Models the browser's per-origin durable storage: JSON-serialized blobs
//! keyed by string, synchronous get/set/remove, no expiry, no transactions,
//! no schema versioning. Capacity is bounded by platform quota, so writes can
//! fail; write failures surface as recoverable [`StorageError`]s rather than
//! panics.
//!
//! Read-side failures fail open: a missing or unparseable entry degrades to
//! the caller's empty state after a warning, and the corrupt entry is
//! removed. That mirrors the storage contract this model has always had and
//! is the accepted data-loss trade-off for a single-operator prototype.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors that can occur against the key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing medium rejected the write (platform quota).
    #[error("storage quota exceeded: {used} of {limit} bytes in use")]
    QuotaExceeded {
        /// Bytes currently stored.
        used: usize,
        /// Quota in bytes.
        limit: usize,
    },

    /// Filesystem-level failure.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized for storage.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A synchronous string-keyed blob store.
///
/// Methods take `&self`; implementations use interior mutability so several
/// logical stores (cart, session, orders) can share one backing store.
pub trait KvStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::QuotaExceeded`] when the write would exceed
    /// the platform quota, or [`StorageError::Io`] on medium failure.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing medium cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// JSON helpers over any [`KvStore`].
pub trait KvStoreExt: KvStore {
    /// Read and deserialize the value under `key`, failing open to
    /// `T::default()`.
    ///
    /// A missing entry is the empty state. A corrupt entry is logged,
    /// removed, and treated as the empty state. Medium-level read failures
    /// are logged and also degrade to the empty state for the session.
    fn read_json_or_default<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let raw = match self.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(err) => {
                tracing::warn!(key, error = %err, "storage read failed, using empty state");
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "corrupt stored value, resetting to empty state");
                if let Err(remove_err) = self.remove(key) {
                    tracing::warn!(key, error = %remove_err, "failed to remove corrupt value");
                }
                T::default()
            }
        }
    }

    /// Serialize `value` as JSON and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if serialization or the write fails.
    fn write_json<T>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        T: Serialize + ?Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

impl<S: KvStore + ?Sized> KvStoreExt for S {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_json_missing_key_is_default() {
        let store = MemoryStore::new();
        let items: Vec<String> = store.read_json_or_default("nope");
        assert!(items.is_empty());
    }

    #[test]
    fn test_read_json_corrupt_value_resets_to_default() {
        let store = MemoryStore::new();
        store.set("items", "{not json").unwrap();

        let items: Vec<String> = store.read_json_or_default("items");
        assert!(items.is_empty());
        // The corrupt entry is gone afterwards
        assert_eq!(store.get("items").unwrap(), None);
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let store = MemoryStore::new();
        store.write_json("items", &vec!["a", "b"]).unwrap();
        let items: Vec<String> = store.read_json_or_default("items");
        assert_eq!(items, vec!["a", "b"]);
    }
}
