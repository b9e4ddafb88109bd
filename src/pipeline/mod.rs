//! Pipeline orchestration for assessments.
//!
//! This module provides shared orchestration logic for load → evaluate → render
//! workflows, so CLI command handlers stay thin.

mod evaluate;
mod report_stage;
mod request;

pub use evaluate::{
    below_min_score, evaluate, evaluate_batch, payload_fingerprint, resolve_tier, score_request,
};
pub use report_stage::{output_report, render_report, Destination};
pub use request::{load_request, parse_request, AssessmentRequest};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// The weighted composite fell below `--min-score`
    pub const BELOW_MIN_SCORE: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
