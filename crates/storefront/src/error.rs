//! Unified error handling for the storefront core.
//!
//! Provides a unified `AppError` that wraps the subsystem errors. The error
//! taxonomy here is narrow by design: lookups miss with `Option`, cart
//! mutations policy-normalize bad input instead of failing, and corrupt
//! persisted state is recovered locally. What remains are startup problems
//! (config, catalog seed) and persistence I/O.

use thiserror::Error;

use crate::cart::{CartError, PersistenceError};
use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Application-level error type for the storefront core.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog seed data could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Cart operation rejected.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Cart snapshot storage failed.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::from(ConfigError::MissingEnvVar("LAVISHBITE_DATA_DIR".to_string()));
        assert_eq!(
            err.to_string(),
            "Config error: Missing environment variable: LAVISHBITE_DATA_DIR"
        );

        let err = AppError::from(CartError::NotHydrated);
        assert_eq!(
            err.to_string(),
            "Cart error: cart has not been hydrated from storage yet"
        );
    }
}
