//! Global order collection and the order-id sequence.
//!
//! All orders live in one collection shared by every user; per-user views
//! are derived by filtering on user id. The id sequence is persisted under
//! its own key, independent of the collection, so ids are never reused even
//! if the collection is cleared. Gaps can appear when the counter advances
//! without a matching order landing (a crash between allocation and
//! persistence); that weak-consistency window is accepted.

use secureview_core::{OrderId, OrderStatus, UserId};

use crate::keys;
use crate::kv::{KvStore, KvStoreExt, StorageError};
use crate::models::Order;

/// The persisted order-id counter.
pub struct OrderSequence<'a, S: KvStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KvStore + ?Sized> OrderSequence<'a, S> {
    /// Create a sequence over the store.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// The last issued sequence number, or 0 if none was ever issued.
    ///
    /// An unreadable or unparseable counter restarts the sequence; the next
    /// order issued would then be `PSOID001` again.
    #[must_use]
    pub fn last_issued(&self) -> u64 {
        match self.store.get(keys::LAST_ORDER_NUMBER) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(raw, "unparseable order counter, restarting sequence");
                0
            }),
            Ok(None) => 0,
            Err(err) => {
                tracing::warn!(error = %err, "order counter unreadable, restarting sequence");
                0
            }
        }
    }

    /// Allocate the next order id, persisting the advanced counter.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the counter cannot be written; no id is
    /// considered issued in that case.
    pub fn next(&self) -> Result<OrderId, StorageError> {
        let next = self.last_issued() + 1;
        self.store.set(keys::LAST_ORDER_NUMBER, &next.to_string())?;
        Ok(OrderId::from_sequence(next))
    }
}

/// The global, append-only order collection.
///
/// Orders are stored newest-first. Mutations rewrite the whole serialized
/// collection; concurrent writers are last-writer-wins with no versioning.
pub struct OrderRepository<'a, S: KvStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KvStore + ?Sized> OrderRepository<'a, S> {
    /// Create a repository over the store.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Every order, newest first. Corrupt state degrades to empty.
    #[must_use]
    pub fn all_orders(&self) -> Vec<Order> {
        self.store.read_json_or_default(keys::GLOBAL_ALL_ORDERS)
    }

    /// Orders for one user, by creation time descending.
    #[must_use]
    pub fn list_orders_for_user(&self, user_id: &UserId) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .all_orders()
            .into_iter()
            .filter(|o| &o.user_id == user_id)
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    /// Look up one order by id.
    #[must_use]
    pub fn find_order(&self, order_id: &OrderId) -> Option<Order> {
        self.all_orders().into_iter().find(|o| &o.id == order_id)
    }

    /// Prepend a new order and persist the whole collection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the collection cannot be written; the
    /// stored collection is unchanged in that case.
    pub fn insert(&self, order: Order) -> Result<(), StorageError> {
        let mut orders = self.all_orders();
        orders.insert(0, order);
        self.persist(&orders)
    }

    /// Replace the status of the matching order, leaving every other order
    /// and every other field untouched.
    ///
    /// Transitions are unconstrained by design: any status may move to any
    /// other status.
    ///
    /// Returns the updated order, or `None` when the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the collection cannot be re-persisted.
    pub fn update_order_status(
        &self,
        order_id: &OrderId,
        new_status: OrderStatus,
    ) -> Result<Option<Order>, StorageError> {
        let mut orders = self.all_orders();
        let Some(order) = orders.iter_mut().find(|o| &o.id == order_id) else {
            return Ok(None);
        };
        order.status = new_status;
        let updated = order.clone();
        self.persist(&orders)?;
        Ok(Some(updated))
    }

    /// Overwrite the whole collection. Used by checkout for rollback.
    pub(crate) fn persist(&self, orders: &[Order]) -> Result<(), StorageError> {
        self.store.write_json(keys::GLOBAL_ALL_ORDERS, orders)
    }
}
