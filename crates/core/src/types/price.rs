//! Type-safe price representation using decimal arithmetic.
//!
//! The LavishBite catalog is single-currency (USD), so `Price` wraps a bare
//! decimal amount rather than carrying a currency code. Float arithmetic is
//! never used for money.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A unit price in USD.
///
/// Amounts are in the currency's standard unit (dollars, not cents) and are
/// expected to be non-negative; the catalog dataset guarantees this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The extended total for `quantity` units at this price.
    #[must_use]
    pub fn extend(&self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.0)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
