//! Core types for LavishBite.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod category;
pub mod id;
pub mod nutrition;
pub mod price;
pub mod product;
pub mod warning;

pub use cart::CartLine;
pub use category::Category;
pub use id::*;
pub use nutrition::{NutritionFacts, NutritionSummary};
pub use price::Price;
pub use product::Product;
pub use warning::{Warning, WarningKind};
