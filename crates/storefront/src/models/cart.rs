//! Cart item record.

use serde::{Deserialize, Serialize};

use secureview_core::Price;

use crate::catalog::Product;

/// A product snapshot plus a quantity.
///
/// The snapshot is taken at the moment the product enters the cart; later
/// catalog changes (price, stock) do not affect it. Quantity is kept within
/// `1..=product.stock` of the snapshotted stock by every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Price × quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use secureview_core::{CurrencyCode, ProductId};

    fn item() -> CartItem {
        CartItem {
            product: Product {
                id: ProductId::new("prod_005"),
                name: "Stealth Mini Spy Cam".to_owned(),
                description: "Discreet mini spy camera.".to_owned(),
                price: Price::new(dec!(4149.17), CurrencyCode::INR),
                image: "img".to_owned(),
                category: "Specialty Cameras".to_owned(),
                features: Vec::new(),
                stock: 30,
                display_hint: None,
            },
            quantity: 3,
        }
    }

    #[test]
    fn test_line_total() {
        assert_eq!(item().line_total().amount, dec!(12447.51));
    }

    #[test]
    fn test_serde_flattens_product_fields() {
        let json = serde_json::to_value(item()).unwrap();
        // Product fields sit next to quantity, not nested
        assert_eq!(json["id"], "prod_005");
        assert_eq!(json["quantity"], 3);
        assert!(json.get("product").is_none());

        let back: CartItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item());
    }
}
