//! Command implementations for `sv-cli`.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;
pub mod wishlist;

use thiserror::Error;

/// Errors shared across commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The product id does not exist in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// The command needs a signed-in user.
    #[error("Not signed in. Run `sv-cli auth login` first.")]
    NotSignedIn,

    /// The command needs an admin session.
    #[error("This account does not have admin privileges.")]
    NotAdmin,

    /// Sign-in was rejected.
    #[error("Invalid email/phone or password.")]
    LoginRejected,

    /// Signup was rejected (duplicate email or phone).
    #[error("An account with this email or phone already exists.")]
    SignupRejected,

    /// Identifier or field failed validation.
    #[error("{0}")]
    InvalidInput(String),

    /// No order with the given id.
    #[error("Order not found: {0}")]
    OrderNotFound(String),
}
