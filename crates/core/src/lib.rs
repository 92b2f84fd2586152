//! SecureView Core - Shared types library.
//!
//! This crate provides common types used across all SecureView components:
//! - `storefront` - Client-side state and persistence model
//! - `admin` - Order-status console
//! - `cli` - Command-line frontend for the stores
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, phone
//!   numbers, and order statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
