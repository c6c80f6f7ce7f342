//! Suitability scoring and product recommendations.
//!
//! "AI picks" on the storefront are a deterministic scoring/sort over the
//! catalog's per-condition suitability scores - there is no learned model.
//! The same ranking drives three surfaces: full category listings, the
//! homepage picks panel, and the detail-page "similar products" panel.

mod compliance;
mod engine;
mod scorer;

pub use compliance::{ComplianceReport, check_compliance};
pub use engine::{RecommendationEngine, SIMILAR_LIMIT};
pub use scorer::suitability_score;
