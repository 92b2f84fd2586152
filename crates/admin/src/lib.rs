//! SecureView Admin - order-status console.
//!
//! Reads and writes the same global order collection as the storefront. The
//! console is gated on an [`AdminCapability`], which can only be minted from
//! a user record carrying the admin flag. That flag lives in client-held
//! state, so this is a UI-level guard, not a security boundary; a real
//! deployment would enforce the capability at a trusted backend.

#![cfg_attr(not(test), forbid(unsafe_code))]

use secureview_core::{OrderId, OrderStatus, UserId};
use secureview_storefront::kv::{KvStore, StorageError};
use secureview_storefront::models::{Order, User};
use secureview_storefront::orders::OrderRepository;

/// Errors that can occur in the order console.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// No order with the given id exists.
    #[error("order not found: {0}")]
    OrderNotFound(OrderId),

    /// Storage-level failure.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Proof that the holder was signed in as an admin when it was minted.
#[derive(Debug, Clone)]
pub struct AdminCapability {
    user_id: UserId,
}

impl AdminCapability {
    /// Mint a capability for `user`, or `None` when the user is not an
    /// admin.
    #[must_use]
    pub fn for_user(user: &User) -> Option<Self> {
        user.is_admin.then(|| Self {
            user_id: user.id.clone(),
        })
    }

    /// Id of the admin this capability was minted for.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

/// The order-status console.
pub struct OrderConsole<'a, S: KvStore + ?Sized> {
    repository: OrderRepository<'a, S>,
    capability: AdminCapability,
}

impl<'a, S: KvStore + ?Sized> OrderConsole<'a, S> {
    /// Open the console over the shared order collection.
    #[must_use]
    pub const fn new(store: &'a S, capability: AdminCapability) -> Self {
        Self {
            repository: OrderRepository::new(store),
            capability,
        }
    }

    /// Every order from every user, newest first.
    #[must_use]
    pub fn all_orders(&self) -> Vec<Order> {
        self.repository.all_orders()
    }

    /// Look up one order by id.
    #[must_use]
    pub fn find_order(&self, order_id: &OrderId) -> Option<Order> {
        self.repository.find_order(order_id)
    }

    /// Replace the status of one order, leaving everything else untouched.
    ///
    /// Any status may move to any other status. The buyer notification the
    /// storefront used to simulate surfaces as a log event here.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::OrderNotFound`] for an unknown id, or
    /// [`AdminError::Storage`] if the collection cannot be re-persisted.
    pub fn update_order_status(
        &self,
        order_id: &OrderId,
        new_status: OrderStatus,
    ) -> Result<Order, AdminError> {
        let updated = self
            .repository
            .update_order_status(order_id, new_status)?
            .ok_or_else(|| AdminError::OrderNotFound(order_id.clone()))?;

        tracing::info!(
            admin = %self.capability.user_id(),
            order_id = %updated.id,
            status = %updated.status,
            buyer = updated.user_email.as_deref().unwrap_or("n/a"),
            "order status updated, buyer notified"
        );
        Ok(updated)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use secureview_core::{Email, ProductId};
    use secureview_storefront::cart::CartStore;
    use secureview_storefront::catalog::Catalog;
    use secureview_storefront::checkout::{CheckoutService, PaymentFlow};
    use secureview_storefront::directory::{MockDirectory, UserDirectory};
    use secureview_storefront::kv::MemoryStore;
    use secureview_storefront::models::ShippingAddress;
    use secureview_storefront::session::SessionStore;

    fn admin_capability(directory: &MockDirectory) -> AdminCapability {
        let admin = directory.find_by_email("admin@example.com").unwrap();
        AdminCapability::for_user(&admin).unwrap()
    }

    fn place_order(store: &MemoryStore, directory: &MockDirectory) -> Order {
        SessionStore::new(store, directory)
            .login("test@example.com", "password123")
            .unwrap();
        let catalog = Catalog::secureview();
        CartStore::new(store)
            .add_to_cart(catalog.find(&ProductId::new("prod_001")).unwrap(), 1)
            .unwrap();
        CheckoutService::new(store)
            .place_order(
                ShippingAddress {
                    name: "Test User".to_owned(),
                    address: "1 Main St".to_owned(),
                    city: "Pune".to_owned(),
                    postal_code: "411001".to_owned(),
                    country: "India".to_owned(),
                },
                PaymentFlow::ManualReceipt {
                    receipt_filename: "receipt.png".to_owned(),
                },
            )
            .unwrap()
    }

    #[test]
    fn test_capability_denied_for_regular_user() {
        let directory = MockDirectory::seeded();
        let shopper = directory.find_by_email("test@example.com").unwrap();
        assert!(AdminCapability::for_user(&shopper).is_none());
    }

    #[test]
    fn test_capability_minted_for_admin() {
        let directory = MockDirectory::seeded();
        let capability = admin_capability(&directory);
        assert_eq!(capability.user_id().as_str(), "user_admin");
    }

    #[test]
    fn test_console_sees_orders_from_all_users() {
        let store = MemoryStore::new();
        let directory = MockDirectory::seeded();
        let order = place_order(&store, &directory);

        let console = OrderConsole::new(&store, admin_capability(&directory));
        let all = console.all_orders();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, order.id);
        assert_eq!(console.find_order(&order.id).unwrap(), order);
    }

    #[test]
    fn test_update_status() {
        let store = MemoryStore::new();
        let directory = MockDirectory::seeded();
        let order = place_order(&store, &directory);

        let console = OrderConsole::new(&store, admin_capability(&directory));
        let updated = console
            .update_order_status(&order.id, OrderStatus::Confirmed)
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Confirmed);

        // Only the status changed
        let mut expected = order;
        expected.status = OrderStatus::Confirmed;
        assert_eq!(console.find_order(&expected.id).unwrap(), expected);
    }

    #[test]
    fn test_update_unknown_order() {
        let store = MemoryStore::new();
        let directory = MockDirectory::seeded();
        let console = OrderConsole::new(&store, admin_capability(&directory));

        let err = console
            .update_order_status(&OrderId::from_sequence(99), OrderStatus::Shipped)
            .unwrap_err();
        assert!(matches!(err, AdminError::OrderNotFound(_)));
    }

    #[test]
    fn test_new_signup_is_never_admin() {
        let store = MemoryStore::new();
        let directory = MockDirectory::seeded();
        SessionStore::new(&store, &directory)
            .signup(
                "Upstart",
                Email::parse("upstart@example.com").unwrap(),
                SecretString::from("pw-pw-pw-pw"),
                secureview_core::Phone::parse("5550001112").unwrap(),
            )
            .unwrap();

        let user = directory.find_by_email("upstart@example.com").unwrap();
        assert!(AdminCapability::for_user(&user).is_none());
    }
}
