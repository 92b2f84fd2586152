//! Integration tests for SecureView.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p secureview-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shopping_flow` - Sign-in through checkout and admin fulfilment
//! - `wishlist_scoping` - Per-user wishlist isolation
//! - `persistence` - File-backed state across store reopens
//!
//! Every test runs against a [`TestContext`]: a file-backed store in a fresh
//! temporary directory plus the seeded user directory, the same setup the
//! CLI gets from a clean data directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tempfile::TempDir;

use secureview_storefront::directory::MockDirectory;
use secureview_storefront::kv::FileStore;

/// Shared fixture: one data directory, one store, one seeded directory.
pub struct TestContext {
    /// Keeps the data directory alive for the duration of the test.
    pub data_dir: TempDir,
    pub store: FileStore,
    pub directory: MockDirectory,
}

impl TestContext {
    /// Open a fresh context in a new temporary directory.
    ///
    /// # Panics
    ///
    /// Panics when the temporary directory or the store cannot be created;
    /// both mean the test environment itself is broken.
    #[must_use]
    pub fn new() -> Self {
        let data_dir = TempDir::new().expect("create temp data dir");
        let store = FileStore::open(data_dir.path()).expect("open file store");
        Self {
            data_dir,
            store,
            directory: MockDirectory::seeded(),
        }
    }

    /// Reopen the store over the same data directory, as a new process
    /// would.
    ///
    /// # Panics
    ///
    /// Panics when the store cannot be reopened.
    #[must_use]
    pub fn reopen(&self) -> FileStore {
        FileStore::open(self.data_dir.path()).expect("reopen file store")
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
