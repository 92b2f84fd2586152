//! User and address records.

use serde::{Deserialize, Serialize};

use secureview_core::{AddressId, Email, Phone, UserId};

/// A storefront user.
///
/// Created at signup, re-persisted whole on every mutation, never
/// hard-deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_admin: bool,
}

impl User {
    /// The default shipping address, if any.
    #[must_use]
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.is_default)
    }
}

/// A saved address, owned exclusively by one user.
///
/// At most one address per user carries `is_default` under normal operation:
/// the first address added becomes default, and when the default is removed
/// the first remaining address is promoted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Unique within the owning user.
    pub id: AddressId,
    /// Label, e.g. "Home" or "John's Office".
    pub name: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Input for [`crate::session::SessionStore::add_address`]; the id and
/// default flag are assigned by the session store.
#[derive(Debug, Clone)]
pub struct NewAddress {
    pub name: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}
