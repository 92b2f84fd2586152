//! Persisted domain records.
//!
//! These are the shapes that actually land in the key-value store. Field
//! names keep the camelCase casing the stored blobs have always used, so
//! previously written state round-trips.

pub mod cart;
pub mod order;
pub mod user;

pub use cart::CartItem;
pub use order::{Order, ShippingAddress};
pub use user::{Address, NewAddress, User};
