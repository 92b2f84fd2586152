//! Checkout orchestration.
//!
//! Order placement composes the session, cart, order sequence, and order
//! collection. The storage layer has no cross-key transactions, so placement
//! is sequenced for the least-bad failure modes: the order is persisted
//! before the cart is cleared, and a failed cart clear rolls the collection
//! back to its prior contents. A crash between counter allocation and order
//! persistence leaves a gap in the id sequence; ids are never reused.

use std::time::Duration;

use chrono::Utc;

use secureview_core::{CurrencyCode, OrderStatus, Price};

use crate::cart::CartStore;
use crate::keys;
use crate::kv::{KvStore, KvStoreExt, StorageError};
use crate::models::{Order, ShippingAddress, User};
use crate::orders::{OrderRepository, OrderSequence};

/// How the order is being paid for; decides the initial status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentFlow {
    /// Buyer uploaded a payment receipt; the order waits for manual
    /// confirmation.
    ManualReceipt {
        /// Filename of the uploaded receipt.
        receipt_filename: String,
    },
    /// Direct payment; the order starts out pending.
    Direct,
}

/// Errors that can occur while placing an order.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    /// Nothing in the cart.
    #[error("cannot place an order with an empty cart")]
    EmptyCart,

    /// No signed-in user.
    #[error("checkout requires a signed-in user")]
    NotAuthenticated,

    /// Manual-payment flow without a receipt reference.
    #[error("manual payment requires a receipt filename")]
    MissingReceipt,

    /// Storage-level failure; the cart is preserved.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Checkout orchestrator over a [`KvStore`].
pub struct CheckoutService<'a, S: KvStore + ?Sized> {
    store: &'a S,
    latency: Duration,
}

impl<'a, S: KvStore + ?Sized> CheckoutService<'a, S> {
    /// Create a checkout service with no artificial processing delay.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self {
            store,
            latency: Duration::ZERO,
        }
    }

    /// Add a fixed processing delay before placement. Runs to completion;
    /// not cancellable.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Place an order from the current cart for the signed-in user.
    ///
    /// On success the order is appended to the global collection (newest
    /// first) and the cart is cleared. On a storage failure after the order
    /// landed, the collection is rolled back so the cart and collection stay
    /// consistent; the allocated id is abandoned in that case.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::NotAuthenticated`] with nobody signed in
    /// - [`CheckoutError::EmptyCart`] with nothing in the cart
    /// - [`CheckoutError::MissingReceipt`] in the manual flow with an empty
    ///   receipt filename
    /// - [`CheckoutError::Storage`] when persisting fails
    pub fn place_order(
        &self,
        shipping_address: ShippingAddress,
        flow: PaymentFlow,
    ) -> Result<Order, CheckoutError> {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }

        let user: Option<User> = self.store.read_json_or_default(keys::CURRENT_USER);
        let user = user.ok_or(CheckoutError::NotAuthenticated)?;

        let cart = CartStore::new(self.store);
        let items = cart.items();
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let (status, payment_receipt_filename) = match flow {
            PaymentFlow::ManualReceipt { receipt_filename } => {
                if receipt_filename.trim().is_empty() {
                    return Err(CheckoutError::MissingReceipt);
                }
                (
                    OrderStatus::AwaitingPaymentConfirmation,
                    Some(receipt_filename),
                )
            }
            PaymentFlow::Direct => (OrderStatus::Pending, None),
        };

        let total_amount = items
            .iter()
            .fold(Price::zero(CurrencyCode::default()), |total, item| {
                total.plus(&item.line_total())
            });

        let sequence = OrderSequence::new(self.store);
        let id = sequence.next()?;

        let order = Order {
            id,
            user_id: user.id.clone(),
            user_name: Some(user.name.clone()),
            user_email: Some(user.email.as_str().to_owned()),
            items,
            total_amount,
            shipping_address,
            created_at: Utc::now(),
            status,
            payment_receipt_filename,
        };

        let repository = OrderRepository::new(self.store);
        let previous = repository.all_orders();
        repository.insert(order.clone())?;

        if let Err(err) = cart.clear_cart() {
            // Roll the collection back rather than leave an order whose cart
            // was never consumed; the allocated id becomes a sequence gap.
            tracing::warn!(order_id = %order.id, error = %err, "cart clear failed, rolling back order");
            if let Err(rollback_err) = repository.persist(&previous) {
                tracing::error!(order_id = %order.id, error = %rollback_err, "order rollback failed");
            }
            return Err(err.into());
        }

        tracing::info!(
            order_id = %order.id,
            user_id = %order.user_id,
            total = %order.total_amount,
            status = %order.status,
            "order placed"
        );
        Ok(order)
    }
}
