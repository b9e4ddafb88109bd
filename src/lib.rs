//! **Brand alignment scoring, classification and tiered report assembly.**
//!
//! `brand-alignment` turns a brand assessment into a deterministic report payload.
//! An assessment rates five categories (positioning, messaging, visibility,
//! credibility, conversion) through 25 sub-criterion ratings on a 1–5 scale, or
//! supplies pre-aggregated category scores. Optional context signals (such as
//! "no testimonials") steer the written insights.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: Categories, the [`CategoryMap`] that keys everything by
//!   category, score newtypes and context signals.
//! - **[`scoring`]**: Normalization to the canonical 1–20 scale, the weighted
//!   and diagnostic composites, and severity/tier classification.
//! - **[`insights`]**: Template-driven diagnosis paragraphs, signal modifiers,
//!   the overall narrative and upsell copy.
//! - **[`analysis`]**: Weakest and strong categories, the opportunity outlook
//!   and prioritized recommendations.
//! - **[`payload`]**: Product tiers and assembly of the tiered
//!   [`ReportPayload`].
//! - **[`pipeline`]**: Request loading, evaluation (single and batch) and report
//!   output.
//! - **[`reports`]**: JSON, terminal summary and Markdown renderers.
//!
//! Every stage is a pure function of its input, so the same request always
//! produces the same payload, from any number of threads.
//!
//! ## Getting Started
//!
//! ```
//! use brand_alignment::{evaluate, AppConfig, AssessmentRequest, RawAssessmentInput};
//!
//! let request = AssessmentRequest::from_ratings(RawAssessmentInput::uniform(3.0))
//!     .with_tier("extended");
//! let payload = evaluate(&request, &AppConfig::default())?;
//!
//! assert_eq!(payload.composite.value, 60);
//! assert!(payload.extended.is_some());
//! assert!(payload.upsell.is_some());
//! # Ok::<(), brand_alignment::AlignmentError>(())
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! The `brand-alignment` binary wraps [`pipeline`] with `score` and `upsell`
//! subcommands. See `brand-alignment --help`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Scores are small bounded integers; f64 round-trips are checked upstream
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod insights;
pub mod model;
pub mod payload;
pub mod pipeline;
pub mod reports;
pub mod scoring;

// Re-export main types for convenience
pub use analysis::{AggregateFindings, OpportunityOutlook, Recommendation};
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use error::{AlignmentError, ErrorContext, OptionContext, Result};
pub use insights::{CategoryInsight, InsightBundle, Upsell};
pub use model::{
    Category, CategoryMap, ContextSignals, PillarScore, RawAssessmentInput, RawCategoryScore,
    Signal,
};
pub use payload::{ProductTier, ReportPayload, TierInputs};
pub use pipeline::{evaluate, evaluate_batch, AssessmentRequest};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{CompositeScore, OverallBand, ScoreCard, Severity, Tier};
