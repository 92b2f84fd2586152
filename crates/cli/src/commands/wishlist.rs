//! Wishlist commands.
//!
//! The wishlist is per-user; every command needs a signed-in session.
//!
//! # Usage
//!
//! ```bash
//! sv-cli wishlist add prod_003
//! sv-cli wishlist remove prod_003
//! sv-cli wishlist show
//! ```

use secureview_core::ProductId;
use secureview_storefront::catalog::Catalog;
use secureview_storefront::directory::MockDirectory;
use secureview_storefront::kv::KvStore;
use secureview_storefront::session::SessionStore;
use secureview_storefront::wishlist::WishlistStore;

use super::CliError;

fn wishlist_for_session<S: KvStore>(store: &S) -> Result<WishlistStore<'_, S>, CliError> {
    let directory = MockDirectory::seeded();
    let user = SessionStore::new(store, &directory)
        .current_user()
        .ok_or(CliError::NotSignedIn)?;
    Ok(WishlistStore::new(store, Some(user.id)))
}

/// Save a product to the signed-in user's wishlist.
///
/// # Errors
///
/// Returns [`CliError::NotSignedIn`], [`CliError::UnknownProduct`], or a
/// storage error.
pub fn add(store: &impl KvStore, product_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::secureview();
    let product = catalog
        .find(&ProductId::new(product_id))
        .ok_or_else(|| CliError::UnknownProduct(product_id.to_owned()))?;

    wishlist_for_session(store)?.add_to_wishlist(product)?;
    println!("Saved {} to your wishlist.", product.name);
    Ok(())
}

/// Remove a product from the signed-in user's wishlist.
///
/// # Errors
///
/// Returns [`CliError::NotSignedIn`] or a storage error.
pub fn remove(store: &impl KvStore, product_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    wishlist_for_session(store)?.remove_from_wishlist(&ProductId::new(product_id))?;
    println!("Removed from your wishlist.");
    Ok(())
}

/// Print the signed-in user's wishlist.
///
/// # Errors
///
/// Returns [`CliError::NotSignedIn`].
pub fn show(store: &impl KvStore) -> Result<(), Box<dyn std::error::Error>> {
    let items = wishlist_for_session(store)?.items();
    if items.is_empty() {
        println!("Your wishlist is empty.");
        return Ok(());
    }
    for product in items {
        println!(
            "{:<10} {:<36} {:>12}",
            product.id,
            product.name,
            product.price.display()
        );
    }
    Ok(())
}
