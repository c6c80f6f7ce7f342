//! FDA-style nutrition facts and cart-level nutrition summaries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-serving nutrition facts for a product.
///
/// Gram amounts are one-decimal fixed-point; milligram amounts and calories
/// are whole numbers. All values are non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NutritionFacts {
    /// Serving size description (e.g., "150g", "185g (cooked)").
    pub serving_size: String,
    pub calories: u32,
    /// Total fat in grams.
    pub total_fat: Decimal,
    /// Saturated fat in grams.
    pub saturated_fat: Decimal,
    /// Trans fat in grams.
    pub trans_fat: Decimal,
    /// Cholesterol in milligrams.
    pub cholesterol: u32,
    /// Sodium in milligrams.
    pub sodium: u32,
    /// Total carbohydrates in grams.
    pub total_carbs: Decimal,
    /// Dietary fiber in grams.
    pub fiber: Decimal,
    /// Sugars in grams.
    pub sugars: Decimal,
    /// Protein in grams.
    pub protein: Decimal,
    /// Potassium in milligrams.
    pub potassium: u32,
}

/// Quantity-scaled nutrition totals over a cart.
///
/// A derived aggregate: always recomputed from current cart lines, never
/// stored or patched incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NutritionSummary {
    pub calories: u64,
    /// Protein in grams.
    pub protein: Decimal,
    /// Dietary fiber in grams.
    pub fiber: Decimal,
    /// Sodium in milligrams.
    pub sodium: u64,
}

impl NutritionSummary {
    /// Fold one cart line's worth of nutrition into the summary.
    pub fn accumulate(&mut self, facts: &NutritionFacts, quantity: u32) {
        let qty = u64::from(quantity);
        self.calories += u64::from(facts.calories) * qty;
        self.protein += facts.protein * Decimal::from(quantity);
        self.fiber += facts.fiber * Decimal::from(quantity);
        self.sodium += u64::from(facts.sodium) * qty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(calories: u32, protein: &str, fiber: &str, sodium: u32) -> NutritionFacts {
        NutritionFacts {
            serving_size: "100g".to_string(),
            calories,
            protein: protein.parse().expect("protein"),
            fiber: fiber.parse().expect("fiber"),
            sodium,
            ..NutritionFacts::default()
        }
    }

    #[test]
    fn test_summary_scales_by_quantity() {
        let mut summary = NutritionSummary::default();
        summary.accumulate(&facts(500, "10.0", "2.5", 75), 2);
        summary.accumulate(&facts(300, "4.0", "1.0", 40), 1);

        assert_eq!(summary.calories, 1300);
        assert_eq!(summary.protein, "24.0".parse::<Decimal>().expect("decimal"));
        assert_eq!(summary.fiber, "6.0".parse::<Decimal>().expect("decimal"));
        assert_eq!(summary.sodium, 190);
    }

    #[test]
    fn test_empty_summary_is_zero() {
        let summary = NutritionSummary::default();
        assert_eq!(summary.calories, 0);
        assert_eq!(summary.protein, Decimal::ZERO);
        assert_eq!(summary.fiber, Decimal::ZERO);
        assert_eq!(summary.sodium, 0);
    }
}
