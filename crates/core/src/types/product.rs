//! Catalog product records.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::nutrition::NutritionFacts;
use super::price::Price;
use super::warning::Warning;

/// A health-compliant food product from the catalog.
///
/// Products are immutable once loaded. The cart captures a snapshot of this
/// struct at add-time, so a `Product` value in a cart line is decoupled from
/// later catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub price: Price,
    /// Image path relative to the asset root.
    pub image: String,
    pub description: String,
    /// Slugs of the health categories this product belongs to.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Average review rating, 0.0-5.0 with one decimal place.
    #[serde(default)]
    pub rating: Decimal,
    /// Number of reviews behind the rating.
    #[serde(default)]
    pub reviews: u32,
    /// Badge slugs such as "heart-healthy" or "low-sodium", display order.
    #[serde(default)]
    pub health_badges: Vec<String>,
    /// Ingredient warnings, display order.
    #[serde(default)]
    pub warnings: Vec<Warning>,
    /// Ingredient list, label order.
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub nutrition: NutritionFacts,
    /// Condition slug -> suitability score (0-100).
    #[serde(default)]
    pub suitability: BTreeMap<String, u8>,
}

const fn default_in_stock() -> bool {
    true
}
