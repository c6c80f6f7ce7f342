//! The cart ledger: authoritative in-session cart state.
//!
//! An insertion-ordered sequence of lines keyed by product identity, with
//! merge-on-insert. Derived aggregates (total, count, nutrition summary) are
//! full re-folds over the current lines on every read - never cached, so
//! they can never drift from the cart's true state.
//!
//! Mutators take `&mut self`: the single-writer model of the original
//! session cart is enforced by the type system instead of a lock. A caller
//! that shares a ledger across threads wraps it in its own mutex so that
//! {mutate, recompute, persist} stays one atomic unit.

use rust_decimal::Decimal;
use thiserror::Error;

use lavishbite_core::{CartLine, NutritionSummary, Product, ProductId};

use super::persistence::PersistenceAdapter;

/// Cart mutation errors.
///
/// Policy handling means invalid input (zero quantities, absent ids) never
/// errors; the one rejection is touching the cart before hydration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// `hydrate` has not run yet; mutating now could overwrite the durable
    /// snapshot with an empty cart.
    #[error("cart has not been hydrated from storage yet")]
    NotHydrated,
}

/// The cart ledger. One per session; owns the cart exclusively.
#[derive(Debug)]
pub struct CartLedger {
    lines: Vec<CartLine>,
    hydrated: bool,
    persistence: PersistenceAdapter,
}

impl CartLedger {
    /// Create an empty, not-yet-hydrated ledger over `persistence`.
    ///
    /// Mutators are rejected until [`hydrate`](Self::hydrate) runs.
    #[must_use]
    pub const fn new(persistence: PersistenceAdapter) -> Self {
        Self {
            lines: Vec::new(),
            hydrated: false,
            persistence,
        }
    }

    /// Load the persisted snapshot and accept mutations from here on.
    ///
    /// Runs the adapter's load exactly once; corrupt or missing snapshots
    /// hydrate to an empty cart. Calling again is a no-op.
    pub fn hydrate(&mut self) {
        if self.hydrated {
            tracing::warn!("Cart ledger already hydrated, ignoring");
            return;
        }
        self.lines = self.persistence.load();
        self.hydrated = true;
    }

    /// Whether the persisted snapshot has been loaded.
    #[must_use]
    pub const fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Current cart lines, insertion-ordered.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` units of `product`.
    ///
    /// Merges into the existing line for the product's id if there is one
    /// (the line keeps its position); otherwise appends a new line holding a
    /// snapshot of `product`. A zero quantity is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotHydrated`] before hydration.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<(), CartError> {
        self.guard_hydrated()?;
        if quantity == 0 {
            return Ok(());
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id() == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine::new(product.clone(), quantity));
        }

        self.persist();
        Ok(())
    }

    /// Remove the line for `id`, if present. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotHydrated`] before hydration.
    pub fn remove_item(&mut self, id: ProductId) -> Result<(), CartError> {
        self.guard_hydrated()?;
        self.lines.retain(|line| line.product_id() != id);
        self.persist();
        Ok(())
    }

    /// Set the line for `id` to exactly `quantity` units.
    ///
    /// A zero quantity behaves exactly like [`remove_item`](Self::remove_item).
    /// Never creates a line: an absent id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotHydrated`] before hydration.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) -> Result<(), CartError> {
        self.guard_hydrated()?;
        if quantity == 0 {
            return self.remove_item(id);
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id() == id) {
            line.quantity = quantity;
        }

        self.persist();
        Ok(())
    }

    /// Empty the cart unconditionally.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotHydrated`] before hydration.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.guard_hydrated()?;
        self.lines.clear();
        self.persist();
        Ok(())
    }

    /// Cart total: sum of unit price x quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Cart count: sum of quantities over all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Quantity-scaled nutrition totals over all lines.
    #[must_use]
    pub fn nutrition_summary(&self) -> NutritionSummary {
        let mut summary = NutritionSummary::default();
        for line in &self.lines {
            line.accumulate_nutrition(&mut summary);
        }
        summary
    }

    const fn guard_hydrated(&self) -> Result<(), CartError> {
        if self.hydrated {
            Ok(())
        } else {
            Err(CartError::NotHydrated)
        }
    }

    /// Write-through after a mutation. A failed save is logged and the
    /// in-memory cart stays the source of truth for the session.
    fn persist(&self) {
        if let Err(e) = self.persistence.save(&self.lines) {
            tracing::warn!(error = %e, "Failed to persist cart, keeping in-memory state");
        }
    }
}
