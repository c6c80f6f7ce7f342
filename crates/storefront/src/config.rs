//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `LAVISHBITE_DATA_DIR` - Directory holding the catalog seed files
//!   `products.json` and `categories.json` (default: `data`)
//! - `LAVISHBITE_STORAGE_DIR` - Directory for persisted cart snapshots
//!   (default: `storage`)
//! - `LAVISHBITE_CART_KEY` - Namespace key for the cart snapshot slot
//!   (default: `lavishbite-cart`)

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the catalog seed JSON files
    pub data_dir: PathBuf,
    /// Directory for persisted cart snapshots
    pub storage_dir: PathBuf,
    /// Namespace key for the durable cart slot
    pub cart_key: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. Every
    /// variable has a default, so loading cannot fail today; the `Result`
    /// return keeps the signature stable if required variables are added.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("LAVISHBITE_DATA_DIR", "data"));
        let storage_dir = PathBuf::from(get_env_or_default("LAVISHBITE_STORAGE_DIR", "storage"));
        let cart_key = get_env_or_default("LAVISHBITE_CART_KEY", "lavishbite-cart");

        Ok(Self {
            data_dir,
            storage_dir,
            cart_key,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            storage_dir: PathBuf::from("storage"),
            cart_key: "lavishbite-cart".to_string(),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.storage_dir, PathBuf::from("storage"));
        assert_eq!(config.cart_key, "lavishbite-cart");
    }
}
