//! Order history commands for the signed-in user.
//!
//! # Usage
//!
//! ```bash
//! sv-cli orders list
//! sv-cli orders show PSOID001
//! ```

use secureview_core::OrderId;
use secureview_storefront::directory::MockDirectory;
use secureview_storefront::kv::KvStore;
use secureview_storefront::models::Order;
use secureview_storefront::orders::OrderRepository;
use secureview_storefront::session::SessionStore;

use super::CliError;

pub(crate) fn print_order_line(order: &Order) {
    println!(
        "{:<10} {}  {:>12}  {}",
        order.id,
        order.created_at.format("%Y-%m-%d %H:%M"),
        order.total_amount.display(),
        order.status
    );
}

pub(crate) fn print_order_detail(order: &Order) {
    print_order_line(order);
    if let Some(name) = &order.user_name {
        println!("  Buyer: {name}");
    }
    for item in &order.items {
        println!(
            "  {:<10} {:<36} x{:<3} {:>12}",
            item.product.id,
            item.product.name,
            item.quantity,
            item.line_total().display()
        );
    }
    let ship = &order.shipping_address;
    println!(
        "  Ship to: {}, {}, {}, {} {}",
        ship.name, ship.address, ship.city, ship.postal_code, ship.country
    );
    if let Some(receipt) = &order.payment_receipt_filename {
        println!("  Receipt: {receipt}");
    }
}

/// List the signed-in user's orders, newest first.
///
/// # Errors
///
/// Returns [`CliError::NotSignedIn`].
pub fn list(store: &impl KvStore) -> Result<(), Box<dyn std::error::Error>> {
    let directory = MockDirectory::seeded();
    let user = SessionStore::new(store, &directory)
        .current_user()
        .ok_or(CliError::NotSignedIn)?;

    let orders = OrderRepository::new(store).list_orders_for_user(&user.id);
    if orders.is_empty() {
        println!("No orders yet.");
        return Ok(());
    }
    for order in &orders {
        print_order_line(order);
    }
    Ok(())
}

/// Show one of the signed-in user's orders in full.
///
/// # Errors
///
/// Returns [`CliError::NotSignedIn`], or [`CliError::OrderNotFound`] when the
/// id does not exist or belongs to another user.
pub fn show(store: &impl KvStore, order_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let directory = MockDirectory::seeded();
    let user = SessionStore::new(store, &directory)
        .current_user()
        .ok_or(CliError::NotSignedIn)?;

    let order = OrderRepository::new(store)
        .find_order(&OrderId::new(order_id))
        .filter(|o| o.user_id == user.id)
        .ok_or_else(|| CliError::OrderNotFound(order_id.to_owned()))?;

    print_order_detail(&order);
    Ok(())
}
