//! SecureView Storefront - client-side state and persistence model.
//!
//! Everything a storefront session needs to remember lives in a per-origin
//! [`kv::KvStore`]: the signed-in user, the cart, per-user wishlists, the
//! viewing-history recency list, and the global order collection. There is no
//! backend and no network layer; all reads and writes are synchronous and the
//! only shared resource is the storage key space.
//!
//! # Modules
//!
//! - [`kv`] - Persistent key-value store abstraction (memory and file backed)
//! - [`catalog`] - Static, read-only product catalog
//! - [`models`] - Persisted domain records (user, cart item, order)
//! - [`directory`] - Injected user/credential directory
//! - [`session`] - Authentication and address management
//! - [`cart`] - Device-scoped shopping cart
//! - [`wishlist`] - Per-user saved products
//! - [`history`] - Bounded viewing-history recency list
//! - [`orders`] - Global order collection and the order-id sequence
//! - [`checkout`] - Order placement orchestrating cart, session, and orders
//! - [`recommend`] - Seam for the external recommendation engine
//!
//! # Concurrency
//!
//! The model is single-writer by design. Mutations are read-modify-write over
//! whole serialized collections; two writers racing on the same key are
//! last-writer-wins with no versioning. See the crate-level design notes.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod directory;
pub mod history;
pub mod keys;
pub mod kv;
pub mod models;
pub mod orders;
pub mod recommend;
pub mod session;
pub mod wishlist;
