//! Viewing-history recency list.
//!
//! A bounded, deduplicated most-recent-first list of viewed product ids.
//! Re-viewing a product moves it to the front; once over capacity the oldest
//! entries fall off. Feeds the recommendation seam.

use secureview_core::ProductId;

use crate::keys;
use crate::kv::{KvStore, KvStoreExt, StorageError};

/// Maximum number of remembered product views.
pub const MAX_HISTORY_LENGTH: usize = 20;

/// The viewing history over a [`KvStore`].
pub struct ViewingHistoryStore<'a, S: KvStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KvStore + ?Sized> ViewingHistoryStore<'a, S> {
    /// Create a viewing-history store.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Viewed product ids, most recent first.
    #[must_use]
    pub fn history(&self) -> Vec<ProductId> {
        self.store.read_json_or_default(keys::VIEWING_HISTORY)
    }

    /// Record a product view: move-to-front-or-insert, then truncate to
    /// [`MAX_HISTORY_LENGTH`].
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the history fails.
    pub fn add_to_history(&self, product_id: &ProductId) -> Result<(), StorageError> {
        let mut history = self.history();
        history.retain(|id| id != product_id);
        history.insert(0, product_id.clone());
        history.truncate(MAX_HISTORY_LENGTH);
        self.store.write_json(keys::VIEWING_HISTORY, &history)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    fn ids(history: &[ProductId]) -> Vec<&str> {
        history.iter().map(ProductId::as_str).collect()
    }

    #[test]
    fn test_reviewing_moves_to_front_and_dedupes() {
        let store = MemoryStore::new();
        let history = ViewingHistoryStore::new(&store);

        for id in ["A", "B", "A", "C"] {
            history.add_to_history(&ProductId::new(id)).unwrap();
        }
        assert_eq!(ids(&history.history()), ["C", "A", "B"]);
    }

    #[test]
    fn test_capacity_evicts_oldest_first() {
        let store = MemoryStore::new();
        let history = ViewingHistoryStore::new(&store);

        for i in 0..MAX_HISTORY_LENGTH + 5 {
            history
                .add_to_history(&ProductId::new(format!("prod_{i:03}")))
                .unwrap();
        }

        let current = history.history();
        assert_eq!(current.len(), MAX_HISTORY_LENGTH);
        // Newest at the front, the five oldest evicted
        assert_eq!(current[0].as_str(), "prod_024");
        assert!(!current.iter().any(|id| id.as_str() == "prod_004"));
        assert!(current.iter().any(|id| id.as_str() == "prod_005"));
    }

    #[test]
    fn test_corrupt_history_degrades_to_empty() {
        let store = MemoryStore::new();
        store.set(keys::VIEWING_HISTORY, "[[[").unwrap();

        let history = ViewingHistoryStore::new(&store);
        assert!(history.history().is_empty());

        history.add_to_history(&ProductId::new("prod_001")).unwrap();
        assert_eq!(history.history().len(), 1);
    }
}
