//! Core data model for brand assessments.
//!
//! Categories are a closed enumeration, and everything keyed by category
//! uses [`CategoryMap`] so a missing pillar is unrepresentable. Scores carry
//! their scale in the type: [`RawCategoryScore`] (5–25) and [`PillarScore`]
//! (canonical 1–20).

mod assessment;
mod category;
mod scores;
mod signals;

pub use assessment::RawAssessmentInput;
pub use category::{Category, CategoryMap};
pub use scores::{PillarScore, RawCategoryScore};
pub use signals::{ContextSignals, Signal};
