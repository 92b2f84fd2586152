//! Per-user wishlist.
//!
//! Unlike the cart, the wishlist is scoped by user id: the storage key is
//! re-derived from the signed-in user, so switching accounts switches lists
//! and each user's list survives until they sign back in. With nobody signed
//! in every operation bypasses storage entirely.

use secureview_core::{ProductId, UserId};

use crate::catalog::Product;
use crate::keys;
use crate::kv::{KvStore, KvStoreExt, StorageError};

/// A saved product. Pure snapshot, unique per product id.
pub type WishlistItem = Product;

/// The wishlist for one (possibly absent) user over a [`KvStore`].
pub struct WishlistStore<'a, S: KvStore + ?Sized> {
    store: &'a S,
    user_id: Option<UserId>,
}

impl<'a, S: KvStore + ?Sized> WishlistStore<'a, S> {
    /// Create a wishlist store for the given user, or a bypassing store when
    /// `user_id` is `None`.
    #[must_use]
    pub const fn new(store: &'a S, user_id: Option<UserId>) -> Self {
        Self { store, user_id }
    }

    fn key(&self) -> Option<String> {
        self.user_id.as_ref().map(keys::wishlist)
    }

    /// Current wishlist contents; empty with nobody signed in.
    #[must_use]
    pub fn items(&self) -> Vec<WishlistItem> {
        self.key()
            .map_or_else(Vec::new, |key| self.store.read_json_or_default(&key))
    }

    /// Save a product. Idempotent by product id; a no-op when signed out.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the wishlist fails.
    pub fn add_to_wishlist(&self, product: &Product) -> Result<(), StorageError> {
        let Some(key) = self.key() else {
            return Ok(());
        };
        let mut items = self.items();
        if items.iter().any(|i| i.id == product.id) {
            return Ok(());
        }
        items.push(product.clone());
        self.store.write_json(&key, &items)
    }

    /// Remove a saved product. Idempotent; a no-op when signed out.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the wishlist fails.
    pub fn remove_from_wishlist(&self, product_id: &ProductId) -> Result<(), StorageError> {
        let Some(key) = self.key() else {
            return Ok(());
        };
        let mut items = self.items();
        items.retain(|i| &i.id != product_id);
        self.store.write_json(&key, &items)
    }

    /// Whether the product is currently saved.
    #[must_use]
    pub fn is_product_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.items().iter().any(|i| &i.id == product_id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::kv::MemoryStore;

    fn product(id: &str) -> Product {
        Catalog::secureview()
            .find(&ProductId::new(id))
            .unwrap()
            .clone()
    }

    #[test]
    fn test_add_is_idempotent() {
        let store = MemoryStore::new();
        let wishlist = WishlistStore::new(&store, Some(UserId::new("user_123")));
        let p = product("prod_001");

        wishlist.add_to_wishlist(&p).unwrap();
        wishlist.add_to_wishlist(&p).unwrap();
        assert_eq!(wishlist.items().len(), 1);
        assert!(wishlist.is_product_in_wishlist(&p.id));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = MemoryStore::new();
        let wishlist = WishlistStore::new(&store, Some(UserId::new("user_123")));
        let p = product("prod_001");

        wishlist.add_to_wishlist(&p).unwrap();
        wishlist.remove_from_wishlist(&p.id).unwrap();
        wishlist.remove_from_wishlist(&p.id).unwrap();
        assert!(!wishlist.is_product_in_wishlist(&p.id));
    }

    #[test]
    fn test_signed_out_operations_bypass_storage() {
        let store = MemoryStore::new();
        let wishlist = WishlistStore::new(&store, None);
        let p = product("prod_001");

        wishlist.add_to_wishlist(&p).unwrap();
        assert!(wishlist.items().is_empty());
        assert!(!wishlist.is_product_in_wishlist(&p.id));
        assert_eq!(store.used_bytes(), 0);
    }

    #[test]
    fn test_lists_are_user_scoped_and_survive_switching() {
        let store = MemoryStore::new();
        let alice = UserId::new("user_123");
        let bob = UserId::new("user_456");

        WishlistStore::new(&store, Some(alice.clone()))
            .add_to_wishlist(&product("prod_001"))
            .unwrap();

        // Bob sees nothing of Alice's list
        let bobs = WishlistStore::new(&store, Some(bob));
        assert!(bobs.items().is_empty());
        bobs.add_to_wishlist(&product("prod_002")).unwrap();

        // Switching back to Alice restores her list unchanged
        let alices = WishlistStore::new(&store, Some(alice));
        let items = alices.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, ProductId::new("prod_001"));
    }
}
