//! Order record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use secureview_core::{OrderId, OrderStatus, Price, UserId};

use super::cart::CartItem;

/// Flattened shipping address captured at checkout.
///
/// Deliberately independent of the user's saved [`super::Address`] records;
/// the order keeps its own copy forever.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    /// Recipient full name.
    pub name: String,
    /// Street address.
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// A placed order.
///
/// Created once at checkout and never deleted; the only mutation after
/// placement is an admin-driven status change. Items and total are snapshots:
/// catalog prices can drift without affecting historical orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    /// Denormalized for admin display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Denormalized for admin display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    pub items: Vec<CartItem>,
    /// Sum of item price × quantity at placement time; never recomputed.
    pub total_amount: Price,
    pub shipping_address: ShippingAddress,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    /// Present in the manual-payment flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_receipt_filename: Option<String>,
}
