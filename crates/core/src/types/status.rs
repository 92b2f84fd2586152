//! Order status enum.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an order.
///
/// Serialized with the human-readable labels the order collection has always
/// used ("Awaiting Payment Confirmation", "Confirmed", ...), so existing
/// stored orders round-trip unchanged.
///
/// Transitions are admin-driven and intentionally unconstrained: any status
/// may move to any other status, and no status is terminal. Manual-receipt
/// checkouts start at [`OrderStatus::AwaitingPaymentConfirmation`];
/// direct-payment checkouts start at [`OrderStatus::Pending`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Awaiting Payment Confirmation")]
    AwaitingPaymentConfirmation,
    Confirmed,
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All statuses in the order the admin console presents them.
    pub const ALL: [Self; 6] = [
        Self::AwaitingPaymentConfirmation,
        Self::Confirmed,
        Self::Pending,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Human-readable label (also the serialized form).
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AwaitingPaymentConfirmation => "Awaiting Payment Confirmation",
            Self::Confirmed => "Confirmed",
            Self::Pending => "Pending",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both the display label and a CLI-friendly kebab-case form.
        match s {
            "Awaiting Payment Confirmation" | "awaiting-payment-confirmation" => {
                Ok(Self::AwaitingPaymentConfirmation)
            }
            "Confirmed" | "confirmed" => Ok(Self::Confirmed),
            "Pending" | "pending" => Ok(Self::Pending),
            "Shipped" | "shipped" => Ok(Self::Shipped),
            "Delivered" | "delivered" => Ok(Self::Delivered),
            "Cancelled" | "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}
