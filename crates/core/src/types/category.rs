//! Health condition categories.

use serde::{Deserialize, Serialize};

/// A health condition category (cardiovascular, diabetes, hypertension).
///
/// The category slug doubles as the condition key used by product
/// suitability maps; the catalog dataset guarantees every key a product
/// references corresponds to a known category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub name: String,
    pub short_name: String,
    /// Emoji icon.
    pub icon: String,
    pub description: String,
    /// Dietary guideline strings, display order.
    #[serde(default)]
    pub guidelines: Vec<String>,
    #[serde(default)]
    pub hero_image: String,
}
