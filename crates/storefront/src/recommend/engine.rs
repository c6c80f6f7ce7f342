//! Deterministic recommendation ranking over the catalog.

use lavishbite_core::{Product, ProductId};

use crate::catalog::CatalogStore;

use super::scorer::suitability_score;

/// Bounded result size for the homepage picks and similar-products panels.
pub const SIMILAR_LIMIT: usize = 4;

/// Ranks catalog products by per-condition suitability.
///
/// Read-only over the catalog store; every method is deterministic for a
/// fixed catalog. Ties are broken by rating descending, then by catalog
/// insertion order (the sorts are stable).
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: CatalogStore,
}

impl RecommendationEngine {
    /// Create an engine over `catalog`.
    #[must_use]
    pub const fn new(catalog: CatalogStore) -> Self {
        Self { catalog }
    }

    /// Top products for a health condition.
    ///
    /// Filters out `exclude` (if given), sorts by suitability score
    /// descending with rating and catalog order as tie-breaks, and truncates
    /// to `limit`. If fewer than `limit` products qualify, returns all that
    /// do - no padding.
    #[must_use]
    pub fn recommend(
        &self,
        condition: &str,
        exclude: Option<ProductId>,
        limit: usize,
    ) -> Vec<&Product> {
        let mut ranked: Vec<&Product> = self
            .catalog
            .all_products()
            .iter()
            .filter(|product| exclude != Some(product.id))
            .collect();

        sort_by_suitability(&mut ranked, condition);
        ranked.truncate(limit);
        ranked
    }

    /// Full category listing, sorted by suitability for that category.
    ///
    /// Unlike [`recommend`](Self::recommend), only products belonging to the
    /// category qualify, and the result is not truncated.
    #[must_use]
    pub fn ranked_for_category(&self, slug: &str) -> Vec<&Product> {
        let mut ranked = self.catalog.products_by_category(slug);
        sort_by_suitability(&mut ranked, slug);
        ranked
    }

    /// Similar-product panel for a detail page.
    ///
    /// Ranks by the product's own strongest condition and excludes the
    /// product itself. A product with an empty suitability map gets no
    /// panel (empty result).
    #[must_use]
    pub fn similar_to(&self, product: &Product) -> Vec<&Product> {
        self.top_condition(product).map_or_else(Vec::new, |condition| {
            self.recommend(condition, Some(product.id), SIMILAR_LIMIT)
        })
    }

    /// The condition a product scores highest for.
    ///
    /// Exact score ties resolve to the first condition key in map order,
    /// which keeps the detail-page panel deterministic.
    #[must_use]
    pub fn top_condition<'a>(&self, product: &'a Product) -> Option<&'a str> {
        // max_by_key would keep the last of several maxima; we want the first.
        let mut best: Option<(&str, u8)> = None;
        for (condition, &score) in &product.suitability {
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((condition, score));
            }
        }
        best.map(|(condition, _)| condition)
    }

    /// Homepage featured picks: in-stock products by rating, then review
    /// count, then catalog order.
    #[must_use]
    pub fn featured(&self, limit: usize) -> Vec<&Product> {
        let mut ranked: Vec<&Product> = self
            .catalog
            .all_products()
            .iter()
            .filter(|product| product.in_stock)
            .collect();

        ranked.sort_by(|a, b| {
            b.rating
                .cmp(&a.rating)
                .then_with(|| b.reviews.cmp(&a.reviews))
        });
        ranked.truncate(limit);
        ranked
    }
}

/// Stable sort by suitability for `condition` descending, rating descending.
fn sort_by_suitability(products: &mut [&Product], condition: &str) {
    products.sort_by(|a, b| {
        suitability_score(b, condition)
            .cmp(&suitability_score(a, condition))
            .then_with(|| b.rating.cmp(&a.rating))
    });
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use lavishbite_core::{Category, NutritionFacts, Price};

    use super::*;

    struct Fixture {
        id: i32,
        rating: &'static str,
        in_stock: bool,
        reviews: u32,
        categories: &'static [&'static str],
        scores: &'static [(&'static str, u8)],
    }

    fn product(fixture: &Fixture) -> Product {
        Product {
            id: ProductId::new(fixture.id),
            name: format!("Product {}", fixture.id),
            slug: format!("product-{}", fixture.id),
            price: Price::from_cents(999),
            image: String::new(),
            description: String::new(),
            categories: fixture.categories.iter().map(ToString::to_string).collect(),
            in_stock: fixture.in_stock,
            rating: fixture.rating.parse().expect("rating"),
            reviews: fixture.reviews,
            health_badges: Vec::new(),
            warnings: Vec::new(),
            ingredients: Vec::new(),
            nutrition: NutritionFacts::default(),
            suitability: fixture
                .scores
                .iter()
                .map(|&(k, v)| (k.to_string(), v))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    fn category(slug: &str) -> Category {
        Category {
            slug: slug.to_string(),
            name: slug.to_string(),
            short_name: slug.to_string(),
            icon: String::new(),
            description: String::new(),
            guidelines: Vec::new(),
            hero_image: String::new(),
        }
    }

    fn engine(fixtures: &[Fixture]) -> RecommendationEngine {
        let catalog = CatalogStore::from_records(
            fixtures.iter().map(product).collect(),
            vec![
                category("cardiovascular"),
                category("diabetes"),
                category("hypertension"),
            ],
        )
        .expect("catalog");
        RecommendationEngine::new(catalog)
    }

    fn ids(products: &[&Product]) -> Vec<i32> {
        products.iter().map(|p| p.id.as_i32()).collect()
    }

    #[test]
    fn test_recommend_sorts_by_score_descending() {
        let engine = engine(&[
            Fixture { id: 1, rating: "4.0", in_stock: true, reviews: 10, categories: &[], scores: &[("diabetes", 60)] },
            Fixture { id: 2, rating: "4.0", in_stock: true, reviews: 10, categories: &[], scores: &[("diabetes", 90)] },
            Fixture { id: 3, rating: "4.0", in_stock: true, reviews: 10, categories: &[], scores: &[("diabetes", 75)] },
        ]);

        assert_eq!(ids(&engine.recommend("diabetes", None, 10)), vec![2, 3, 1]);
    }

    #[test]
    fn test_recommend_is_deterministic_across_calls() {
        let engine = engine(&[
            Fixture { id: 1, rating: "4.8", in_stock: true, reviews: 124, categories: &[], scores: &[("cardiovascular", 95)] },
            Fixture { id: 2, rating: "4.5", in_stock: true, reviews: 89, categories: &[], scores: &[("cardiovascular", 70)] },
            Fixture { id: 3, rating: "4.6", in_stock: true, reviews: 203, categories: &[], scores: &[("cardiovascular", 88)] },
            Fixture { id: 4, rating: "4.7", in_stock: true, reviews: 156, categories: &[], scores: &[("cardiovascular", 92)] },
            Fixture { id: 5, rating: "4.4", in_stock: true, reviews: 67, categories: &[], scores: &[("cardiovascular", 60)] },
        ]);

        let first = ids(&engine.recommend("cardiovascular", None, 4));
        assert_eq!(first, vec![1, 4, 3, 2]);
        for _ in 0..10 {
            assert_eq!(ids(&engine.recommend("cardiovascular", None, 4)), first);
        }
    }

    #[test]
    fn test_tie_breaks_on_rating_then_catalog_order() {
        let engine = engine(&[
            Fixture { id: 1, rating: "4.2", in_stock: true, reviews: 10, categories: &[], scores: &[("diabetes", 80)] },
            Fixture { id: 2, rating: "4.7", in_stock: true, reviews: 10, categories: &[], scores: &[("diabetes", 80)] },
            Fixture { id: 3, rating: "4.7", in_stock: true, reviews: 99, categories: &[], scores: &[("diabetes", 80)] },
        ]);

        // Same score: higher rating wins; equal rating falls back to catalog
        // order (2 before 3).
        assert_eq!(ids(&engine.recommend("diabetes", None, 10)), vec![2, 3, 1]);
    }

    #[test]
    fn test_exclusion_never_appears_even_when_top_scored() {
        let engine = engine(&[
            Fixture { id: 7, rating: "5.0", in_stock: true, reviews: 10, categories: &[], scores: &[("hypertension", 99)] },
            Fixture { id: 8, rating: "4.0", in_stock: true, reviews: 10, categories: &[], scores: &[("hypertension", 50)] },
        ]);

        let result = ids(&engine.recommend("hypertension", Some(ProductId::new(7)), 4));
        assert_eq!(result, vec![8]);
    }

    #[test]
    fn test_limit_underflow_returns_what_qualifies() {
        let engine = engine(&[
            Fixture { id: 1, rating: "4.0", in_stock: true, reviews: 10, categories: &[], scores: &[] },
            Fixture { id: 2, rating: "4.1", in_stock: true, reviews: 10, categories: &[], scores: &[] },
        ]);

        assert_eq!(engine.recommend("diabetes", None, 4).len(), 2);
        assert!(engine.recommend("diabetes", None, 0).is_empty());
    }

    #[test]
    fn test_ranked_for_category_only_includes_members() {
        let engine = engine(&[
            Fixture { id: 1, rating: "4.0", in_stock: true, reviews: 10, categories: &["diabetes"], scores: &[("diabetes", 70)] },
            Fixture { id: 2, rating: "4.0", in_stock: true, reviews: 10, categories: &["cardiovascular"], scores: &[("diabetes", 95)] },
            Fixture { id: 3, rating: "4.0", in_stock: true, reviews: 10, categories: &["diabetes"], scores: &[("diabetes", 85)] },
        ]);

        assert_eq!(ids(&engine.ranked_for_category("diabetes")), vec![3, 1]);
        assert!(engine.ranked_for_category("unknown").is_empty());
    }

    #[test]
    fn test_similar_to_uses_top_condition_and_excludes_self() {
        let engine = engine(&[
            Fixture { id: 1, rating: "4.8", in_stock: true, reviews: 10, categories: &[], scores: &[("cardiovascular", 95), ("diabetes", 80)] },
            Fixture { id: 2, rating: "4.5", in_stock: true, reviews: 10, categories: &[], scores: &[("cardiovascular", 90)] },
            Fixture { id: 3, rating: "4.5", in_stock: true, reviews: 10, categories: &[], scores: &[("diabetes", 99)] },
        ]);

        let salmon = engine.catalog.product_by_id(ProductId::new(1)).expect("product").clone();
        // Top condition for product 1 is cardiovascular, so product 2
        // (cardio 90) outranks product 3 (cardio 0).
        assert_eq!(ids(&engine.similar_to(&salmon)), vec![2, 3]);
    }

    #[test]
    fn test_top_condition_tie_resolves_to_first_key() {
        let engine = engine(&[Fixture {
            id: 1,
            rating: "4.0",
            in_stock: true,
            reviews: 10,
            categories: &[],
            scores: &[("hypertension", 85), ("cardiovascular", 85)],
        }]);

        let p = engine.catalog.product_by_id(ProductId::new(1)).expect("product");
        assert_eq!(engine.top_condition(p), Some("cardiovascular"));
    }

    #[test]
    fn test_featured_skips_out_of_stock() {
        let engine = engine(&[
            Fixture { id: 1, rating: "4.9", in_stock: false, reviews: 500, categories: &[], scores: &[] },
            Fixture { id: 2, rating: "4.6", in_stock: true, reviews: 80, categories: &[], scores: &[] },
            Fixture { id: 3, rating: "4.6", in_stock: true, reviews: 120, categories: &[], scores: &[] },
            Fixture { id: 4, rating: "4.8", in_stock: true, reviews: 60, categories: &[], scores: &[] },
        ]);

        assert_eq!(ids(&engine.featured(2)), vec![4, 3]);
    }
}
