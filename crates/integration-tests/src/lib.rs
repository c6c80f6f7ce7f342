//! Integration test support for LavishBite.
//!
//! Provides a seeded catalog fixture shared by the tests in `tests/`. The
//! fixture mirrors the shape of the production seed data: three health
//! categories and a handful of products with suitability scores, nutrition
//! facts, and mixed-shape ingredient warnings.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use lavishbite_core::{Category, NutritionFacts, Price, Product, ProductId, Warning, WarningKind};
use lavishbite_storefront::catalog::CatalogStore;

/// Build a product with the fields the tests care about.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn product(
    id: i32,
    name: &str,
    cents: i64,
    rating: &str,
    reviews: u32,
    categories: &[&str],
    scores: &[(&str, u8)],
    nutrition: NutritionFacts,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        price: Price::from_cents(cents),
        image: format!("/images/products/{id}.jpeg"),
        description: String::new(),
        categories: categories.iter().map(ToString::to_string).collect(),
        in_stock: true,
        rating: rating.parse().unwrap_or(Decimal::ZERO),
        reviews,
        health_badges: Vec::new(),
        warnings: vec![
            Warning::PlainText("Keep refrigerated".to_string()),
            Warning::Categorized {
                kind: WarningKind::Allergen,
                message: "May contain traces of nuts".to_string(),
            },
        ],
        ingredients: Vec::new(),
        nutrition,
        suitability: scores
            .iter()
            .map(|&(k, v)| (k.to_string(), v))
            .collect::<BTreeMap<_, _>>(),
    }
}

fn category(slug: &str, name: &str) -> Category {
    Category {
        slug: slug.to_string(),
        name: name.to_string(),
        short_name: name.to_string(),
        icon: String::new(),
        description: String::new(),
        guidelines: vec!["High fiber content (>3g per serving)".to_string()],
        hero_image: String::new(),
    }
}

/// Nutrition facts with just calories and sodium set.
#[must_use]
pub fn nutrition(calories: u32, sodium: u32) -> NutritionFacts {
    NutritionFacts {
        serving_size: "100g".to_string(),
        calories,
        sodium,
        ..NutritionFacts::default()
    }
}

/// A seeded catalog in the shape of the production dataset.
///
/// # Panics
///
/// Panics if the fixture records are inconsistent (duplicate ids).
#[must_use]
pub fn seeded_catalog() -> CatalogStore {
    let products = vec![
        product(
            1,
            "Wild-Caught Salmon Fillet",
            2499,
            "4.8",
            124,
            &["cardiovascular"],
            &[("cardiovascular", 95), ("diabetes", 80), ("hypertension", 85)],
            nutrition(280, 75),
        ),
        product(
            2,
            "Organic Brown Rice",
            849,
            "4.5",
            89,
            &["diabetes", "hypertension"],
            &[("cardiovascular", 75), ("diabetes", 92), ("hypertension", 80)],
            nutrition(216, 10),
        ),
        product(
            3,
            "Fresh Spinach Bunch",
            449,
            "4.6",
            203,
            &["cardiovascular", "hypertension"],
            &[("cardiovascular", 90), ("diabetes", 88), ("hypertension", 96)],
            nutrition(23, 79),
        ),
        product(
            4,
            "Steel-Cut Oats",
            699,
            "4.7",
            156,
            &["cardiovascular", "diabetes"],
            &[("cardiovascular", 92), ("diabetes", 90), ("hypertension", 78)],
            nutrition(150, 0),
        ),
        product(
            5,
            "Unsalted Almonds",
            1299,
            "4.6",
            67,
            &["cardiovascular", "diabetes"],
            &[("cardiovascular", 88), ("diabetes", 85), ("hypertension", 82)],
            nutrition(164, 0),
        ),
    ];

    let categories = vec![
        category("cardiovascular", "Cardiovascular Health"),
        category("diabetes", "Diabetes Friendly"),
        category("hypertension", "Hypertension Friendly"),
    ];

    CatalogStore::from_records(products, categories).expect("fixture catalog is consistent")
}
