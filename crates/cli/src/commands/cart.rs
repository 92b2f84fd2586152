//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! sv-cli cart add prod_001 -q 2
//! sv-cli cart update prod_001 -q 5
//! sv-cli cart remove prod_001
//! sv-cli cart show
//! sv-cli cart clear
//! ```

use secureview_core::ProductId;
use secureview_storefront::cart::CartStore;
use secureview_storefront::catalog::Catalog;
use secureview_storefront::kv::KvStore;

use super::CliError;

/// Add a product to the cart.
///
/// # Errors
///
/// Returns [`CliError::UnknownProduct`] or a storage error.
pub fn add(
    store: &impl KvStore,
    product_id: &str,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::secureview();
    let product = catalog
        .find(&ProductId::new(product_id))
        .ok_or_else(|| CliError::UnknownProduct(product_id.to_owned()))?;

    let cart = CartStore::new(store);
    cart.add_to_cart(product, quantity)?;
    println!("Added. Cart now holds {} item(s).", cart.item_count());
    Ok(())
}

/// Remove a product from the cart.
///
/// # Errors
///
/// Returns a storage error if the cart cannot be persisted.
pub fn remove(store: &impl KvStore, product_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let cart = CartStore::new(store);
    cart.remove_from_cart(&ProductId::new(product_id))?;
    println!("Removed. Cart now holds {} item(s).", cart.item_count());
    Ok(())
}

/// Set the quantity for a cart line.
///
/// # Errors
///
/// Returns a storage error if the cart cannot be persisted.
pub fn update(
    store: &impl KvStore,
    product_id: &str,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let cart = CartStore::new(store);
    cart.update_quantity(&ProductId::new(product_id), quantity)?;
    println!("Updated. Cart now holds {} item(s).", cart.item_count());
    Ok(())
}

/// Print the cart contents and total.
pub fn show(store: &impl KvStore) {
    let cart = CartStore::new(store);
    let items = cart.items();
    if items.is_empty() {
        println!("Your cart is empty.");
        return;
    }
    for item in &items {
        println!(
            "{:<10} {:<36} x{:<3} {:>12}",
            item.product.id,
            item.product.name,
            item.quantity,
            item.line_total().display()
        );
    }
    println!(
        "Total: {}  ({} item(s))",
        cart.cart_total().display(),
        cart.item_count()
    );
}

/// Empty the cart.
///
/// # Errors
///
/// Returns a storage error if the cart cannot be persisted.
pub fn clear(store: &impl KvStore) -> Result<(), Box<dyn std::error::Error>> {
    CartStore::new(store).clear_cart()?;
    println!("Cart cleared.");
    Ok(())
}
