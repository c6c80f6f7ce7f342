//! LavishBite Storefront core library.
//!
//! This crate owns the two subsystems with real behavior behind the
//! storefront UI:
//!
//! - the **cart ledger** ([`cart`]): a persistent, insertion-ordered cart
//!   with merge-on-insert semantics and derived aggregates recomputed on
//!   every read, and
//! - the **recommendation engine** ([`recommend`]): deterministic ranking of
//!   the catalog by per-condition suitability scores.
//!
//! Presentation layers consume both through a session-scoped [`state::Session`],
//! never through process-wide globals.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod recommend;
pub mod state;

pub use error::{AppError, Result};
