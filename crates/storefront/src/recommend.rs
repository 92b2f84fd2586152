//! Recommendation seam.
//!
//! The actual recommendation engine is an external collaborator; this module
//! defines the request shape it accepts, the trait it implements, and the
//! filtering applied to whatever it returns. Any id the engine produces that
//! no longer resolves in the catalog is dropped.

use secureview_core::ProductId;

use crate::catalog::{Catalog, Product};

/// Everything the engine gets to work with for one recommendation call.
#[derive(Debug, Clone)]
pub struct RecommendationRequest {
    /// Product currently being viewed.
    pub product_id: ProductId,
    pub product_name: String,
    pub category: String,
    /// Previously viewed product ids, most recent first.
    pub viewing_history: Vec<ProductId>,
    /// Every other product id currently in the catalog.
    pub other_product_ids: Vec<ProductId>,
    /// Upper bound on returned recommendations.
    pub max_count: usize,
}

/// An opaque ranked-recommendation source.
pub trait RecommendationEngine {
    /// Return ranked product ids, best first. May include ids that no longer
    /// resolve; the caller filters them.
    fn recommend(&self, request: &RecommendationRequest) -> Vec<ProductId>;
}

/// Ask `engine` for recommendations around `product`, resolving the result
/// against the catalog.
///
/// Unknown ids and the viewed product itself are dropped; at most
/// `max_count` products come back, in the engine's order.
pub fn recommendations_for<'c>(
    catalog: &'c Catalog,
    engine: &dyn RecommendationEngine,
    product: &Product,
    viewing_history: Vec<ProductId>,
    max_count: usize,
) -> Vec<&'c Product> {
    let other_product_ids = catalog
        .all()
        .iter()
        .filter(|p| p.id != product.id)
        .map(|p| p.id.clone())
        .collect();

    let request = RecommendationRequest {
        product_id: product.id.clone(),
        product_name: product.name.clone(),
        category: product.category.clone(),
        viewing_history,
        other_product_ids,
        max_count,
    };

    let mut seen = Vec::new();
    engine
        .recommend(&request)
        .into_iter()
        .filter(|id| id != &product.id && !seen.contains(id) && {
            seen.push(id.clone());
            true
        })
        .filter_map(|id| catalog.find(&id))
        .take(max_count)
        .collect()
}

/// Deterministic offline fallback engine.
///
/// Ranks recently viewed products first, then the rest of the catalog in
/// catalog order. Good enough for the CLI when the external engine is
/// unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryAffinity;

impl RecommendationEngine for CategoryAffinity {
    fn recommend(&self, request: &RecommendationRequest) -> Vec<ProductId> {
        let mut ranked: Vec<ProductId> = Vec::new();
        let mut push = |id: &ProductId| {
            if id != &request.product_id && !ranked.contains(id) {
                ranked.push(id.clone());
            }
        };

        // The request carries no category information per id, so this engine
        // leans on ordering alone: history first signals recency...
        for id in &request.viewing_history {
            push(id);
        }
        // ...then everything else that is available.
        for id in &request.other_product_ids {
            push(id);
        }
        ranked.truncate(request.max_count);
        ranked
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct FixedEngine(Vec<ProductId>);

    impl RecommendationEngine for FixedEngine {
        fn recommend(&self, _request: &RecommendationRequest) -> Vec<ProductId> {
            self.0.clone()
        }
    }

    #[test]
    fn test_unknown_ids_are_filtered_out() {
        let catalog = Catalog::secureview();
        let product = catalog.find(&ProductId::new("prod_001")).unwrap();
        let engine = FixedEngine(vec![
            ProductId::new("prod_404"),
            ProductId::new("prod_002"),
            ProductId::new("prod_003"),
        ]);

        let result = recommendations_for(&catalog, &engine, product, Vec::new(), 5);
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["prod_002", "prod_003"]);
    }

    #[test]
    fn test_current_product_and_duplicates_are_dropped_and_result_truncated() {
        let catalog = Catalog::secureview();
        let product = catalog.find(&ProductId::new("prod_001")).unwrap();
        let engine = FixedEngine(vec![
            ProductId::new("prod_001"),
            ProductId::new("prod_002"),
            ProductId::new("prod_002"),
            ProductId::new("prod_003"),
            ProductId::new("prod_004"),
        ]);

        let result = recommendations_for(&catalog, &engine, product, Vec::new(), 2);
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["prod_002", "prod_003"]);
    }

    #[test]
    fn test_category_affinity_prefers_history() {
        let catalog = Catalog::secureview();
        let product = catalog.find(&ProductId::new("prod_001")).unwrap();
        let history = vec![ProductId::new("prod_007"), ProductId::new("prod_003")];

        let result = recommendations_for(&catalog, &CategoryAffinity, product, history, 3);
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["prod_007", "prod_003", "prod_002"]);
    }
}
