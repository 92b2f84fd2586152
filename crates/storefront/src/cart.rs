//! Device-scoped shopping cart.
//!
//! The cart lives under one fixed key regardless of who is signed in; it is
//! scoped to the device, not the user (unlike the wishlist and orders).
//! Quantities saturate at the stock value snapshotted when the product
//! entered the cart, and every mutation persists the whole collection.

use secureview_core::{CurrencyCode, Price, ProductId};

use crate::catalog::Product;
use crate::keys;
use crate::kv::{KvStore, KvStoreExt, StorageError};
use crate::models::CartItem;

/// The shopping cart over a [`KvStore`].
pub struct CartStore<'a, S: KvStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KvStore + ?Sized> CartStore<'a, S> {
    /// Create a cart store.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Current cart contents. Corrupt or unreadable state degrades to empty.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        self.store.read_json_or_default(keys::CART_ITEMS)
    }

    /// Add `quantity` units of `product`, merging with any existing line.
    ///
    /// The resulting quantity saturates at the product's stock. A product
    /// with zero stock is not added at all, keeping every stored quantity
    /// within `1..=stock`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the cart fails.
    pub fn add_to_cart(&self, product: &Product, quantity: u32) -> Result<(), StorageError> {
        if product.stock == 0 {
            tracing::debug!(product_id = %product.id, "not adding out-of-stock product");
            return Ok(());
        }

        let mut items = self.items();
        if let Some(item) = items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity = item
                .quantity
                .saturating_add(quantity)
                .min(item.product.stock);
        } else {
            items.push(CartItem {
                product: product.clone(),
                quantity: quantity.clamp(1, product.stock),
            });
        }
        self.persist(&items)
    }

    /// Remove the line for `product_id`. A no-op when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the cart fails.
    pub fn remove_from_cart(&self, product_id: &ProductId) -> Result<(), StorageError> {
        let mut items = self.items();
        items.retain(|i| &i.product.id != product_id);
        self.persist(&items)
    }

    /// Set the quantity for `product_id`, clamped to `[1, snapshotted
    /// stock]`. A no-op when the id is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the cart fails.
    pub fn update_quantity(
        &self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<(), StorageError> {
        let mut items = self.items();
        if let Some(item) = items.iter_mut().find(|i| &i.product.id == product_id) {
            item.quantity = quantity.clamp(1, item.product.stock);
        }
        self.persist(&items)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the cart fails.
    pub fn clear_cart(&self) -> Result<(), StorageError> {
        self.persist(&[])
    }

    /// Sum of price × quantity over all lines.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.items()
            .iter()
            .fold(Price::zero(CurrencyCode::default()), |total, item| {
                total.plus(&item.line_total())
            })
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items().iter().map(|i| i.quantity).sum()
    }

    fn persist(&self, items: &[CartItem]) -> Result<(), StorageError> {
        self.store.write_json(keys::CART_ITEMS, items)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::kv::MemoryStore;
    use rust_decimal_macros::dec;

    fn catalog() -> Catalog {
        Catalog::secureview()
    }

    fn product(catalog: &Catalog, id: &str) -> Product {
        catalog.find(&ProductId::new(id)).unwrap().clone()
    }

    #[test]
    fn test_add_reflects_quantity() {
        let store = MemoryStore::new();
        let cart = CartStore::new(&store);
        let p = product(&catalog(), "prod_001");

        cart.add_to_cart(&p, 3).unwrap();
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_add_merges_and_saturates_at_stock() {
        let store = MemoryStore::new();
        let cart = CartStore::new(&store);
        let p = product(&catalog(), "prod_008"); // stock 5

        cart.add_to_cart(&p, 3).unwrap();
        cart.add_to_cart(&p, 3).unwrap();
        assert_eq!(cart.item_count(), 5);

        // Repeated adds never push past stock
        cart.add_to_cart(&p, 100).unwrap();
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_insert_clamps_to_stock() {
        let store = MemoryStore::new();
        let cart = CartStore::new(&store);
        let p = product(&catalog(), "prod_004"); // stock 8

        cart.add_to_cart(&p, 50).unwrap();
        assert_eq!(cart.item_count(), 8);
    }

    #[test]
    fn test_zero_stock_product_is_not_added() {
        let store = MemoryStore::new();
        let cart = CartStore::new(&store);
        let mut p = product(&catalog(), "prod_001");
        p.stock = 0;

        cart.add_to_cart(&p, 1).unwrap();
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_remove_then_add_restores_fresh_entry() {
        let store = MemoryStore::new();
        let cart = CartStore::new(&store);
        let p = product(&catalog(), "prod_002");

        cart.add_to_cart(&p, 20).unwrap();
        cart.remove_from_cart(&p.id).unwrap();
        assert_eq!(cart.item_count(), 0);

        cart.add_to_cart(&p, 4).unwrap();
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let store = MemoryStore::new();
        let cart = CartStore::new(&store);
        let p = product(&catalog(), "prod_002");
        cart.add_to_cart(&p, 1).unwrap();

        cart.remove_from_cart(&ProductId::new("prod_999")).unwrap();
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_update_quantity_clamps_both_ends() {
        let store = MemoryStore::new();
        let cart = CartStore::new(&store);
        let p = product(&catalog(), "prod_003"); // stock 10
        cart.add_to_cart(&p, 5).unwrap();

        cart.update_quantity(&p.id, 0).unwrap();
        assert_eq!(cart.item_count(), 1);

        cart.update_quantity(&p.id, 99).unwrap();
        assert_eq!(cart.item_count(), 10);

        // Absent id is a no-op
        cart.update_quantity(&ProductId::new("prod_999"), 7).unwrap();
        assert_eq!(cart.item_count(), 10);
    }

    #[test]
    fn test_cart_total_is_sum_of_line_totals() {
        let store = MemoryStore::new();
        let cart = CartStore::new(&store);
        let catalog = catalog();
        let a = product(&catalog, "prod_005"); // 4149.17
        let b = product(&catalog, "prod_002"); // 6639.17

        cart.add_to_cart(&a, 2).unwrap();
        cart.add_to_cart(&b, 1).unwrap();

        let expected = dec!(4149.17) * dec!(2) + dec!(6639.17);
        assert_eq!(cart.cart_total().amount, expected);
        // Idempotent under repeated calls without mutation
        assert_eq!(cart.cart_total().amount, expected);
    }

    #[test]
    fn test_clear_cart() {
        let store = MemoryStore::new();
        let cart = CartStore::new(&store);
        let p = product(&catalog(), "prod_001");
        cart.add_to_cart(&p, 2).unwrap();

        cart.clear_cart().unwrap();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.cart_total().amount, dec!(0));
    }

    #[test]
    fn test_snapshot_isolated_from_catalog_drift() {
        let store = MemoryStore::new();
        let cart = CartStore::new(&store);
        let mut p = product(&catalog(), "prod_001");
        cart.add_to_cart(&p, 2).unwrap();

        // Catalog price changes after the snapshot
        p.price = Price::new(dec!(1.00), CurrencyCode::INR);
        assert_eq!(cart.cart_total().amount, dec!(33198.34));
    }

    #[test]
    fn test_quota_failure_leaves_previous_cart_intact() {
        // Quota fits the first line but not the whole catalog
        let store = MemoryStore::with_quota(1024);
        let cart = CartStore::new(&store);
        let catalog = catalog();

        cart.add_to_cart(&product(&catalog, "prod_001"), 1).unwrap();

        let mut failed = false;
        for id in ["prod_002", "prod_003", "prod_004"] {
            let before = cart.items();
            if cart.add_to_cart(&product(&catalog, id), 1).is_err() {
                // The failed write did not clobber the stored cart
                assert_eq!(cart.items(), before);
                failed = true;
                break;
            }
        }
        assert!(failed, "expected a quota failure");
    }
}
