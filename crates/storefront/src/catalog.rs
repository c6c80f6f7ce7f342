//! Immutable in-memory catalog store.
//!
//! The catalog is loaded once at startup from JSON seed files
//! (`products.json` and `categories.json` under the configured data
//! directory) and never mutated afterwards. Product order in the seed file is
//! preserved; the recommendation engine relies on it as the final tie-break.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use lavishbite_core::{Category, Product, ProductId};

/// Errors loading the catalog seed data.
///
/// Unlike the cart path, a missing or unreadable catalog is fatal: the
/// storefront cannot run without products.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("duplicate product id {0} in seed data")]
    DuplicateProduct(ProductId),
}

/// Catalog store holding all products and categories in memory.
///
/// Cheaply cloneable via `Arc`; every reader sees the same immutable data.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    inner: Arc<CatalogInner>,
}

#[derive(Debug)]
struct CatalogInner {
    /// Products in seed-file order.
    products: Vec<Product>,
    categories: Vec<Category>,
    by_id: HashMap<ProductId, usize>,
}

impl CatalogStore {
    /// Load the catalog from seed files under `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if either seed file is missing, unreadable, or
    /// unparseable, or if two products share an id.
    pub fn load(data_dir: &Path) -> Result<Self, CatalogError> {
        let products: Vec<Product> = load_seed_file(&data_dir.join("products.json"))?;
        let categories: Vec<Category> = load_seed_file(&data_dir.join("categories.json"))?;

        tracing::info!(
            products = products.len(),
            categories = categories.len(),
            "Catalog loaded"
        );

        Self::from_records(products, categories)
    }

    /// Build a catalog from in-memory records (used by tests and seeders).
    ///
    /// # Errors
    ///
    /// Returns an error if two products share an id.
    pub fn from_records(
        products: Vec<Product>,
        categories: Vec<Category>,
    ) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            if by_id.insert(product.id, index).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
        }

        Ok(Self {
            inner: Arc::new(CatalogInner {
                products,
                categories,
                by_id,
            }),
        })
    }

    /// All products, in catalog (seed-file) order.
    #[must_use]
    pub fn all_products(&self) -> &[Product] {
        &self.inner.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.inner
            .by_id
            .get(&id)
            .and_then(|&index| self.inner.products.get(index))
    }

    /// All products belonging to the category `slug`, in catalog order.
    #[must_use]
    pub fn products_by_category(&self, slug: &str) -> Vec<&Product> {
        self.inner
            .products
            .iter()
            .filter(|product| product.categories.iter().any(|c| c == slug))
            .collect()
    }

    /// All categories, in seed-file order.
    #[must_use]
    pub fn all_categories(&self) -> &[Category] {
        &self.inner.categories
    }

    /// Look up a category by slug.
    #[must_use]
    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.inner.categories.iter().find(|c| c.slug == slug)
    }
}

/// Read and parse one seed file.
fn load_seed_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lavishbite_core::NutritionFacts;

    fn product(id: i32, slug: &str, categories: &[&str]) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            slug: slug.to_string(),
            price: lavishbite_core::Price::from_cents(999),
            image: format!("/images/products/{slug}.jpeg"),
            description: String::new(),
            categories: categories.iter().map(ToString::to_string).collect(),
            in_stock: true,
            rating: rust_decimal::Decimal::new(45, 1),
            reviews: 10,
            health_badges: Vec::new(),
            warnings: Vec::new(),
            ingredients: Vec::new(),
            nutrition: NutritionFacts::default(),
            suitability: std::collections::BTreeMap::new(),
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

    #[test]
    fn test_lookup_by_id_and_slug() {
        let store = CatalogStore::from_records(
            vec![product(1, "salmon", &["cardiovascular"])],
            vec![category("cardiovascular")],
        )
        .expect("catalog");

        assert!(store.product_by_id(ProductId::new(1)).is_some());
        assert!(store.product_by_id(ProductId::new(99)).is_none());
        assert!(store.category_by_slug("cardiovascular").is_some());
        assert!(store.category_by_slug("unknown").is_none());
    }

    #[test]
    fn test_products_by_category_preserves_order() {
        let store = CatalogStore::from_records(
            vec![
                product(1, "salmon", &["cardiovascular"]),
                product(2, "rice", &["diabetes", "hypertension"]),
                product(3, "spinach", &["cardiovascular", "hypertension"]),
            ],
            vec![category("cardiovascular"), category("hypertension")],
        )
        .expect("catalog");

        let cardio: Vec<i32> = store
            .products_by_category("cardiovascular")
            .iter()
            .map(|p| p.id.as_i32())
            .collect();
        assert_eq!(cardio, vec![1, 3]);
        assert!(store.products_by_category("unknown").is_empty());
    }

    #[test]
    fn test_duplicate_product_id_rejected() {
        let result = CatalogStore::from_records(
            vec![product(1, "salmon", &[]), product(1, "rice", &[])],
            Vec::new(),
        );
        assert!(matches!(result, Err(CatalogError::DuplicateProduct(_))));
    }

    #[test]
    fn test_load_from_seed_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("products.json"),
            serde_json::to_string(&vec![product(1, "salmon", &["cardiovascular"])])
                .expect("serialize"),
        )
        .expect("write products");
        std::fs::write(
            dir.path().join("categories.json"),
            serde_json::to_string(&vec![category("cardiovascular")]).expect("serialize"),
        )
        .expect("write categories");

        let store = CatalogStore::load(dir.path()).expect("load");
        assert_eq!(store.all_products().len(), 1);
        assert_eq!(store.all_categories().len(), 1);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(
            CatalogStore::load(dir.path()),
            Err(CatalogError::Io { .. })
        ));
    }
}
