//! Storage keys for persisted state.
//!
//! Each logical store owns a disjoint set of keys. The only parameterized key
//! is the wishlist, which is scoped by the signed-in user's id.

use secureview_core::UserId;

/// Key for the current signed-in user.
pub const CURRENT_USER: &str = "currentUser";

/// Key for the device-scoped cart.
pub const CART_ITEMS: &str = "cartItems";

/// Key for the viewing-history recency list.
pub const VIEWING_HISTORY: &str = "viewingHistory";

/// Key for the global order collection (all users, filtered client-side).
pub const GLOBAL_ALL_ORDERS: &str = "GLOBAL_ALL_ORDERS";

/// Key for the last issued order sequence number.
///
/// Stored separately from the order collection so ids are never reused even
/// if the collection itself is cleared.
pub const LAST_ORDER_NUMBER: &str = "last_secureview_order_number";

/// Per-user wishlist key.
#[must_use]
pub fn wishlist(user_id: &UserId) -> String {
    format!("wishlistItems_{user_id}")
}
