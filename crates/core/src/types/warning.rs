//! Ingredient warning labels.
//!
//! The catalog dataset carries warnings in two shapes: a bare string
//! ("Contains tree nuts") or an object tagged with a kind
//! (`{"type": "sodium", "message": "High sodium content"}`). The untagged
//! serde representation accepts both without a migration of the dataset.

use serde::{Deserialize, Serialize};

/// The kind of a categorized ingredient warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningKind {
    Sodium,
    Sugar,
    Allergen,
}

/// An ingredient warning attached to a product.
///
/// Order matters for deserialization: the categorized object shape is tried
/// first, and anything that is a plain JSON string falls through to
/// `PlainText`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Warning {
    /// A warning with a known kind, rendered with kind-specific styling.
    Categorized {
        #[serde(rename = "type")]
        kind: WarningKind,
        message: String,
    },
    /// A free-form warning string.
    PlainText(String),
}

impl Warning {
    /// The human-readable message, regardless of shape.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Categorized { message, .. } => message,
            Self::PlainText(text) => text,
        }
    }

    /// The warning kind, if this is a categorized warning.
    #[must_use]
    pub const fn kind(&self) -> Option<WarningKind> {
        match self {
            Self::Categorized { kind, .. } => Some(*kind),
            Self::PlainText(_) => None,
        }
    }
}
