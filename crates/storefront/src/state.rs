//! Application state and the session-scoped consumer surface.
//!
//! `AppState` holds what every session shares: the immutable catalog, the
//! recommendation engine over it, and configuration. A `Session` is opened
//! per device/visitor and owns that visitor's cart ledger, hydrated before
//! the session is handed out - so presentation code never sees a
//! not-yet-hydrated cart.
//!
//! Cart state is dependency-injected through these types rather than living
//! in a process-wide global, so server-rendered contexts and test harnesses
//! never share a cart.

use std::sync::Arc;

use rust_decimal::Decimal;

use lavishbite_core::{CartLine, NutritionSummary, Product, ProductId};

use crate::cart::{CartLedger, FileStore, PersistenceAdapter, SnapshotStore};
use crate::catalog::CatalogStore;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::recommend::RecommendationEngine;

/// Application state shared across all sessions.
///
/// Cheaply cloneable via `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogStore,
    engine: RecommendationEngine,
}

impl AppState {
    /// Load the catalog per `config` and build the shared state.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog seed files cannot be loaded.
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let catalog = CatalogStore::load(&config.data_dir)?;
        Ok(Self::with_catalog(config, catalog))
    }

    /// Build shared state over an already-loaded catalog (used by tests).
    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, catalog: CatalogStore) -> Self {
        let engine = RecommendationEngine::new(catalog.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                engine,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    /// Get a reference to the recommendation engine.
    #[must_use]
    pub fn engine(&self) -> &RecommendationEngine {
        &self.inner.engine
    }

    /// Open a session backed by the configured file store.
    ///
    /// Hydrates the cart from the durable slot before returning; the caller
    /// shows a loading state until this completes.
    #[must_use]
    pub fn open_session(&self) -> Session {
        let store = FileStore::new(self.inner.config.storage_dir.clone());
        self.open_session_with(store)
    }

    /// Open a session over a caller-provided snapshot store.
    #[must_use]
    pub fn open_session_with(&self, store: impl SnapshotStore + 'static) -> Session {
        let adapter = PersistenceAdapter::new(store, self.inner.config.cart_key.clone());
        let mut ledger = CartLedger::new(adapter);
        ledger.hydrate();
        Session {
            state: self.clone(),
            ledger,
        }
    }
}

/// One visitor's session: shared state plus an exclusively-owned cart.
///
/// Mutators forward to the ledger; the hydration guard is unreachable
/// through this surface because `open_session` hydrates first.
#[derive(Debug)]
pub struct Session {
    state: AppState,
    ledger: CartLedger,
}

impl Session {
    /// The shared application state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Current cart lines, insertion-ordered.
    #[must_use]
    pub fn cart_lines(&self) -> &[CartLine] {
        self.ledger.lines()
    }

    /// Cart total in dollars.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.ledger.total()
    }

    /// Total number of units in the cart.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.ledger.count()
    }

    /// Quantity-scaled nutrition totals for the cart.
    #[must_use]
    pub fn cart_nutrition_summary(&self) -> NutritionSummary {
        self.ledger.nutrition_summary()
    }

    /// Add `quantity` units of `product` to the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger rejects the mutation.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) -> Result<()> {
        Ok(self.ledger.add_item(product, quantity)?)
    }

    /// Remove a product from the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger rejects the mutation.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Result<()> {
        Ok(self.ledger.remove_item(id)?)
    }

    /// Set a cart line to an absolute quantity (zero removes the line).
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger rejects the mutation.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) -> Result<()> {
        Ok(self.ledger.set_quantity(id, quantity)?)
    }

    /// Empty the cart (post-checkout).
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger rejects the mutation.
    pub fn clear_cart(&mut self) -> Result<()> {
        Ok(self.ledger.clear()?)
    }
}
