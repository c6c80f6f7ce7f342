//! The cart core: ledger, persistence adapter, and snapshot stores.
//!
//! One [`CartLedger`] exists per session and owns the authoritative cart
//! state. Every mutation writes through to a [`SnapshotStore`] slot via the
//! [`PersistenceAdapter`]; a snapshot that cannot be read back degrades to an
//! empty cart rather than an error.

mod ledger;
mod persistence;

pub use ledger::{CartError, CartLedger};
pub use persistence::{
    FileStore, MemoryStore, PersistenceAdapter, PersistenceError, SNAPSHOT_VERSION, SnapshotStore,
};
