//! Checkout command.
//!
//! # Usage
//!
//! ```bash
//! # Manual payment: the order waits for confirmation of the receipt
//! sv-cli checkout --name "Test User" --street "1 Main St" --city Pune \
//!     --postal-code 411001 --country India --receipt upi-receipt.png
//!
//! # Direct payment: the order starts out pending
//! sv-cli checkout --name "Test User" --street "1 Main St" --city Pune \
//!     --postal-code 411001 --country India
//! ```

use std::time::Duration;

use secureview_storefront::checkout::{CheckoutService, PaymentFlow};
use secureview_storefront::kv::KvStore;
use secureview_storefront::models::ShippingAddress;

/// Place an order from the current cart.
///
/// # Errors
///
/// Returns [`secureview_storefront::checkout::CheckoutError`] for an empty
/// cart, a signed-out session, a blank receipt, or a storage failure.
#[allow(clippy::too_many_arguments)]
pub fn place_order(
    store: &impl KvStore,
    latency: Duration,
    name: &str,
    street: &str,
    city: &str,
    postal_code: &str,
    country: &str,
    receipt: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let shipping = ShippingAddress {
        name: name.to_owned(),
        address: street.to_owned(),
        city: city.to_owned(),
        postal_code: postal_code.to_owned(),
        country: country.to_owned(),
    };
    let flow = match receipt {
        Some(filename) => PaymentFlow::ManualReceipt {
            receipt_filename: filename.to_owned(),
        },
        None => PaymentFlow::Direct,
    };

    let order = CheckoutService::new(store)
        .with_latency(latency)
        .place_order(shipping, flow)?;

    println!("Order {} placed.", order.id);
    println!("  Status: {}", order.status);
    println!("  Total:  {}", order.total_amount.display());
    for item in &order.items {
        println!(
            "  {:<10} {:<36} x{:<3} {:>12}",
            item.product.id,
            item.product.name,
            item.quantity,
            item.line_total().display()
        );
    }
    Ok(())
}
