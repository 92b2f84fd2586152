//! Admin order console commands.
//!
//! The console is opened with a capability minted from the signed-in user;
//! a non-admin session cannot reach any of these operations.
//!
//! # Usage
//!
//! ```bash
//! sv-cli auth login admin@example.com -p adminpassword
//! sv-cli admin list
//! sv-cli admin set-status PSOID001 shipped
//! sv-cli admin set-status PSOID001 "Awaiting Payment Confirmation"
//! ```

use secureview_admin::{AdminCapability, OrderConsole};
use secureview_core::{OrderId, OrderStatus};
use secureview_storefront::directory::MockDirectory;
use secureview_storefront::kv::KvStore;
use secureview_storefront::session::SessionStore;

use super::CliError;
use super::orders::{print_order_detail, print_order_line};

fn console_for_session<S: KvStore>(store: &S) -> Result<OrderConsole<'_, S>, CliError> {
    let directory = MockDirectory::seeded();
    let user = SessionStore::new(store, &directory)
        .current_user()
        .ok_or(CliError::NotSignedIn)?;
    let capability = AdminCapability::for_user(&user).ok_or(CliError::NotAdmin)?;
    Ok(OrderConsole::new(store, capability))
}

/// List every order from every user, newest first.
///
/// # Errors
///
/// Returns [`CliError::NotSignedIn`] or [`CliError::NotAdmin`].
pub fn list(store: &impl KvStore) -> Result<(), Box<dyn std::error::Error>> {
    let console = console_for_session(store)?;
    let orders = console.all_orders();
    if orders.is_empty() {
        println!("No orders.");
        return Ok(());
    }
    for order in &orders {
        print_order_line(order);
    }
    Ok(())
}

/// Show one order, any user's.
///
/// # Errors
///
/// Returns [`CliError::NotSignedIn`], [`CliError::NotAdmin`], or
/// [`CliError::OrderNotFound`].
pub fn show(store: &impl KvStore, order_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let console = console_for_session(store)?;
    let order = console
        .find_order(&OrderId::new(order_id))
        .ok_or_else(|| CliError::OrderNotFound(order_id.to_owned()))?;
    print_order_detail(&order);
    Ok(())
}

/// Set the status of one order. Accepts the display label or its
/// kebab-case form.
///
/// # Errors
///
/// Returns [`CliError::NotSignedIn`], [`CliError::NotAdmin`],
/// [`CliError::InvalidInput`] for an unrecognized status, or the console's
/// not-found / storage errors.
pub fn set_status(
    store: &impl KvStore,
    order_id: &str,
    status: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let status: OrderStatus = status.parse().map_err(CliError::InvalidInput)?;

    let console = console_for_session(store)?;
    let order = console.update_order_status(&OrderId::new(order_id), status)?;
    println!("Order {} is now: {}", order.id, order.status);
    Ok(())
}
