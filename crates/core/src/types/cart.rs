//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::nutrition::NutritionSummary;
use super::product::Product;

/// A single cart line: a product snapshot plus a quantity.
///
/// Invariant: `quantity >= 1`. A mutation that would drive the quantity to
/// zero or below removes the line from the cart instead; the ledger enforces
/// this, so a `CartLine` never holds a non-positive quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product as it was at add-time. Not live-linked to the catalog.
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Create a line from an add-time product snapshot.
    #[must_use]
    pub const fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// The product identity this line is keyed by.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// The extended price for this line (unit price x quantity).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.extend(self.quantity)
    }

    /// Fold this line's quantity-scaled nutrition into `summary`.
    pub fn accumulate_nutrition(&self, summary: &mut NutritionSummary) {
        summary.accumulate(&self.product.nutrition, self.quantity);
    }
}
