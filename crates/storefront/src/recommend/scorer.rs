//! Pure suitability scoring.

use lavishbite_core::Product;

/// Suitability of `product` for the health condition `condition`, 0-100.
///
/// Pure and total: a product with no entry for the condition scores 0.
/// Absence means "no known suitability", not an error.
#[must_use]
pub fn suitability_score(product: &Product, condition: &str) -> u8 {
    product.suitability.get(condition).copied().unwrap_or(0)
}
