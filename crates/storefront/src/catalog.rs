//! Static, read-only product catalog.
//!
//! The catalog is defined in code and never mutated at runtime. Cart and
//! order records snapshot product data at mutation time, so later catalog
//! edits never affect historical state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use secureview_core::{CurrencyCode, Price, ProductId};

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product id (e.g., `prod_001`).
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Image reference (URL or asset path).
    pub image: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    /// Units available; cart quantities are clamped to this at mutation time.
    pub stock: u32,
    /// Optional display hint for image placeholders.
    #[serde(
        rename = "data-ai-hint",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub display_hint: Option<String>,
}

/// The static product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an explicit product list (fixtures in tests).
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products in the given category, in catalog order.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Distinct categories, in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(product.category.as_str());
            }
        }
        seen
    }

    /// The SecureView CCTV/security-camera catalog.
    #[must_use]
    pub fn secureview() -> Self {
        let inr = |units: i64, cents: i64| {
            Price::new(
                Decimal::new(units * 100 + cents, 2),
                CurrencyCode::INR,
            )
        };
        let product = |id: &str,
                       name: &str,
                       description: &str,
                       price: Price,
                       image_label: &str,
                       hint: &str,
                       category: &str,
                       features: &[&str],
                       stock: u32| Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            description: description.to_owned(),
            price,
            image: format!("https://placehold.co/600x400.png?text={image_label}"),
            category: category.to_owned(),
            features: features.iter().map(|&f| f.to_owned()).collect(),
            stock,
            display_hint: Some(hint.to_owned()),
        };

        Self::new(vec![
            product(
                "prod_001",
                "Guardian Eye 4K Outdoor Cam",
                "Weatherproof 4K UHD security camera with night vision and AI motion detection. Ideal for outdoor surveillance.",
                inr(16599, 17),
                "Outdoor+Cam",
                "security camera",
                "Outdoor Cameras",
                &[
                    "4K UHD Resolution",
                    "Weatherproof IP67",
                    "Night Vision (30m)",
                    "AI Motion Detection",
                    "Two-Way Audio",
                ],
                15,
            ),
            product(
                "prod_002",
                "Indoor Sentinel 1080p Pan-Tilt",
                "Full HD 1080p indoor camera with 360° pan and tilt functionality. Keep an eye on your home from anywhere.",
                inr(6639, 17),
                "Indoor+Cam",
                "cctv indoor",
                "Indoor Cameras",
                &[
                    "1080p Full HD",
                    "Pan-Tilt-Zoom",
                    "Night Vision (10m)",
                    "Motion Tracking",
                    "Privacy Mode",
                ],
                25,
            ),
            product(
                "prod_003",
                "DoorGuardian Video Doorbell Pro",
                "Smart video doorbell with 2K resolution, person detection, and instant alerts to your phone.",
                inr(10789, 17),
                "Video+Doorbell",
                "doorbell camera",
                "Video Doorbells",
                &[
                    "2K Resolution",
                    "Person Detection",
                    "Two-Way Talk",
                    "Customizable Chimes",
                    "Night Vision",
                ],
                10,
            ),
            product(
                "prod_004",
                "SecureHome NVR System - 8 Channel",
                "Network Video Recorder system with 8 channels and 2TB storage. Supports up to 8 cameras for comprehensive coverage.",
                inr(29049, 17),
                "NVR+System",
                "security system",
                "NVR Systems",
                &[
                    "8 Channel Support",
                    "2TB HDD Included",
                    "H.265+ Compression",
                    "Remote Access",
                    "Easy Setup",
                ],
                8,
            ),
            product(
                "prod_005",
                "Stealth Mini Spy Cam",
                "Discreet mini spy camera for covert surveillance. Small size, long battery life.",
                inr(4149, 17),
                "Spy+Cam",
                "hidden camera",
                "Specialty Cameras",
                &[
                    "1080p Recording",
                    "Motion Activated",
                    "Long Battery Life",
                    "MicroSD Support",
                ],
                30,
            ),
            product(
                "prod_006",
                "Solar Defender Wireless Cam",
                "100% wire-free outdoor camera powered by solar energy. Continuous surveillance without power concerns.",
                inr(20749, 17),
                "Solar+Cam",
                "solar camera",
                "Outdoor Cameras",
                &[
                    "Solar Powered",
                    "Wire-Free",
                    "1080p HD",
                    "PIR Motion Detection",
                    "Weatherproof",
                ],
                12,
            ),
            product(
                "prod_007",
                "Office Pro 360 Fisheye Cam",
                "Ceiling-mounted fisheye camera offering a 360-degree panoramic view, perfect for office spaces.",
                inr(13238, 50),
                "Fisheye+Cam",
                "office camera",
                "Indoor Cameras",
                &[
                    "5MP Resolution",
                    "360° View",
                    "De-warping",
                    "PoE Support",
                    "Vandal Resistant",
                ],
                18,
            ),
            product(
                "prod_008",
                "GateMaster License Plate Reader",
                "Specialized camera for capturing license plates, even in low light and high-speed conditions.",
                inr(41417, 0),
                "LPR+Cam",
                "license plate",
                "Specialty Cameras",
                &[
                    "High-Speed Capture",
                    "ANPR Software Compatible",
                    "IR Illumination",
                    "Weatherproof",
                ],
                5,
            ),
        ])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::secureview();
        let product = catalog.find(&ProductId::new("prod_001")).unwrap();
        assert_eq!(product.name, "Guardian Eye 4K Outdoor Cam");
        assert_eq!(product.price.amount, dec!(16599.17));
        assert_eq!(product.stock, 15);

        assert!(catalog.find(&ProductId::new("prod_999")).is_none());
    }

    #[test]
    fn test_by_category() {
        let catalog = Catalog::secureview();
        let outdoor = catalog.by_category("Outdoor Cameras");
        assert_eq!(outdoor.len(), 2);
        assert!(outdoor.iter().all(|p| p.category == "Outdoor Cameras"));
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = Catalog::secureview();
        assert_eq!(
            catalog.categories(),
            [
                "Outdoor Cameras",
                "Indoor Cameras",
                "Video Doorbells",
                "NVR Systems",
                "Specialty Cameras",
            ]
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::secureview();
        let mut ids: Vec<_> = catalog.all().iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.all().len());
    }

    #[test]
    fn test_product_serde_shape() {
        let catalog = Catalog::secureview();
        let product = catalog.find(&ProductId::new("prod_005")).unwrap();
        let json = serde_json::to_value(product).unwrap();
        assert_eq!(json["id"], "prod_005");
        assert_eq!(json["data-ai-hint"], "hidden camera");

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(&back, product);
    }
}
