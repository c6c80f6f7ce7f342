//! Cart snapshot persistence.
//!
//! The storage medium is opaque to the ledger: anything that can hold a
//! string under a fixed namespace key qualifies as a [`SnapshotStore`]. The
//! adapter wraps a store with the snapshot envelope (schema version +
//! saved-at stamp) and the error policy: unreadable snapshots are logged and
//! discarded, never propagated as a crash.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use lavishbite_core::CartLine;

/// Current cart snapshot schema version.
///
/// Bump when the serialized shape changes; older snapshots are then treated
/// as unreadable and discarded on load.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors from the snapshot storage layer.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read snapshot slot {key}: {source}")]
    Read {
        key: String,
        source: std::io::Error,
    },
    #[error("failed to write snapshot slot {key}: {source}")]
    Write {
        key: String,
        source: std::io::Error,
    },
    #[error("failed to serialize cart snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A durable key-value slot for serialized cart snapshots.
pub trait SnapshotStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium fails; a missing key is `Ok(None)`.
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium fails.
    fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for Arc<S> {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).write(key, value)
    }
}

/// File-backed snapshot store: one JSON document per key under a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first
    /// write, not here.
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistenceError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| PersistenceError::Write {
            key: key.to_string(),
            source,
        })?;
        std::fs::write(self.path_for(key), value).map_err(|source| PersistenceError::Write {
            key: key.to_string(),
            source,
        })
    }
}

/// In-memory snapshot store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Versioned envelope for a persisted cart.
#[derive(Debug, Serialize, Deserialize)]
struct CartSnapshot {
    schema_version: u32,
    saved_at: DateTime<Utc>,
    lines: Vec<CartLine>,
}

/// Serializes the cart to its durable slot and hydrates it back.
pub struct PersistenceAdapter {
    store: Box<dyn SnapshotStore>,
    key: String,
}

impl PersistenceAdapter {
    /// Create an adapter over `store`, using `key` as the namespace slot.
    pub fn new(store: impl SnapshotStore + 'static, key: impl Into<String>) -> Self {
        Self {
            store: Box::new(store),
            key: key.into(),
        }
    }

    /// Load the persisted cart lines.
    ///
    /// Never fails: a missing, unreadable, corrupt, or version-mismatched
    /// snapshot logs the condition and yields an empty cart.
    #[must_use]
    pub fn load(&self) -> Vec<CartLine> {
        let raw = match self.store.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key = %self.key, "No persisted cart snapshot");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read cart snapshot, starting empty");
                return Vec::new();
            }
        };

        let snapshot: CartSnapshot = match serde_json::from_str(&raw) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Corrupt cart snapshot, starting empty");
                return Vec::new();
            }
        };

        if snapshot.schema_version != SNAPSHOT_VERSION {
            tracing::warn!(
                key = %self.key,
                found = snapshot.schema_version,
                expected = SNAPSHOT_VERSION,
                "Cart snapshot schema version mismatch, starting empty"
            );
            return Vec::new();
        }

        tracing::debug!(key = %self.key, lines = snapshot.lines.len(), "Cart snapshot hydrated");
        snapshot.lines
    }

    /// Persist the current cart lines.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the store write fails. Callers
    /// treat this as non-fatal: the in-memory cart remains the source of
    /// truth for the running session.
    pub fn save(&self, lines: &[CartLine]) -> Result<(), PersistenceError> {
        let snapshot = CartSnapshot {
            schema_version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            lines: lines.to_vec(),
        };
        let raw = serde_json::to_string(&snapshot)?;
        self.store.write(&self.key, &raw)
    }
}

impl std::fmt::Debug for PersistenceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceAdapter")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
