//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! # List every product, or one category
//! sv-cli catalog list
//! sv-cli catalog list -c "Outdoor Cameras"
//!
//! # Show one product (records a view and prints recommendations)
//! sv-cli catalog show prod_001
//! ```

use secureview_core::ProductId;
use secureview_storefront::catalog::{Catalog, Product};
use secureview_storefront::history::ViewingHistoryStore;
use secureview_storefront::kv::KvStore;
use secureview_storefront::recommend::{CategoryAffinity, recommendations_for};

use super::CliError;

/// Recommendations shown under a product.
const RECOMMENDATION_COUNT: usize = 3;

fn print_product_line(product: &Product) {
    println!(
        "{:<10} {:<36} {:>12}  stock {:>3}  [{}]",
        product.id,
        product.name,
        product.price.display(),
        product.stock,
        product.category
    );
}

/// List the catalog, optionally filtered by category.
pub fn list(category: Option<&str>) {
    let catalog = Catalog::secureview();
    match category {
        Some(category) => {
            for product in catalog.by_category(category) {
                print_product_line(product);
            }
        }
        None => {
            for product in catalog.all() {
                print_product_line(product);
            }
        }
    }
}

/// Show one product in full, record the view, and print recommendations.
///
/// # Errors
///
/// Returns [`CliError::UnknownProduct`] for an id not in the catalog, or a
/// storage error if the viewing history cannot be persisted.
pub fn show(store: &impl KvStore, product_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::secureview();
    let id = ProductId::new(product_id);
    let product = catalog
        .find(&id)
        .ok_or_else(|| CliError::UnknownProduct(product_id.to_owned()))?;

    println!("{} - {}", product.id, product.name);
    println!("  {}", product.description);
    println!("  Price: {}   Stock: {}", product.price.display(), product.stock);
    println!("  Category: {}", product.category);
    for feature in &product.features {
        println!("  - {feature}");
    }

    let history = ViewingHistoryStore::new(store);
    history.add_to_history(&id)?;

    let recommended = recommendations_for(
        &catalog,
        &CategoryAffinity,
        product,
        history.history(),
        RECOMMENDATION_COUNT,
    );
    if !recommended.is_empty() {
        println!("\nYou might also like:");
        for product in recommended {
            print_product_line(product);
        }
    }
    Ok(())
}
