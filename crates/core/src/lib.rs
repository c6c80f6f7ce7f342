//! LavishBite Core - Shared domain types library.
//!
//! This crate provides the domain types used across all LavishBite components:
//! - `storefront` - Catalog store, recommendation engine, and cart core
//! - `integration-tests` - End-to-end session tests
//!
//! # Architecture
//!
//! The core crate contains only types and their invariants - no I/O, no
//! filesystem access, no logging. This keeps it lightweight and allows it to
//! be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Products, categories, nutrition facts, cart lines, and the
//!   newtype wrappers for type-safe IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
