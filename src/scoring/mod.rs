//! Scoring: normalization, composite calculation and classification.
//!
//! The output of this module is a [`ScoreCard`], which every later stage
//! reads and none recomputes. A score card is identical for every product
//! tier.
//!
//! # Usage
//!
//! ```
//! use brand_alignment::model::RawAssessmentInput;
//! use brand_alignment::scoring::ScoreCard;
//!
//! let card = ScoreCard::from_ratings(&RawAssessmentInput::uniform(3.0)).unwrap();
//! assert_eq!(card.composite.value, 60);
//! assert_eq!(card.diagnostic_composite.map(|c| c.value), Some(15));
//! ```

mod classify;
mod composite;
mod normalize;

pub use classify::{
    classify, Classification, OverallBand, Severity, Tier, DEVELOPING_MIN, EXCELLENT_MIN,
    MAJOR_GAP_MAX, MODERATE_GAP_MAX, STRONG_MIN,
};
pub use composite::{
    compute_composite, compute_unweighted_composite, CompositeMethod, CompositeScore,
};
pub use normalize::{
    clamp_rating, normalize_assessment, normalize_category, normalize_raw_scores,
    normalize_scores, normalize_to_canonical_range, raw_from_value, ScoreScale, RATING_MAX,
    RATING_MIN,
};

use crate::error::Result;
use crate::model::{CategoryMap, PillarScore, RawAssessmentInput, RawCategoryScore};
use serde::Serialize;

/// Scoring engine version, bumped whenever thresholds, weights or
/// conversions change
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// One category's canonical score with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PillarResult {
    pub score: PillarScore,
    /// Raw 5–25 score, present when the card was built from ratings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<RawCategoryScore>,
    pub severity: Severity,
    pub tier: Tier,
}

/// Every number the report is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    pub pillars: CategoryMap<PillarResult>,
    /// Canonical weighted composite (0–100)
    pub composite: CompositeScore,
    /// Unweighted mean of raw scores (5–25); only available from ratings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic_composite: Option<CompositeScore>,
}

impl ScoreCard {
    /// Build a card from raw sub-criterion ratings.
    pub fn from_ratings(input: &RawAssessmentInput) -> Result<Self> {
        let raw = normalize_assessment(input)?;
        Ok(Self::from_raw(&raw))
    }

    /// Build a card from raw 5–25 category scores.
    ///
    /// Raw scores are kept on each pillar and feed the diagnostic composite.
    #[must_use]
    pub fn from_raw(raw: &CategoryMap<RawCategoryScore>) -> Self {
        let canonical = raw.map(|_, r| r.to_canonical());
        let mut card = Self::from_canonical(&canonical);
        card.pillars = card.pillars.map(|category, pillar| PillarResult {
            raw: Some(*raw.get(category)),
            ..*pillar
        });
        card.diagnostic_composite = Some(compute_unweighted_composite(raw));
        tracing::debug!(
            composite = card.composite.value,
            diagnostic = card.diagnostic_composite.map(|c| c.value),
            "scored raw assessment"
        );
        card
    }

    /// Build a card from scores already on the canonical scale.
    #[must_use]
    pub fn from_canonical(scores: &CategoryMap<PillarScore>) -> Self {
        let pillars = scores.map(|_, &score| {
            let Classification { severity, tier } = classify(score);
            PillarResult {
                score,
                raw: None,
                severity,
                tier,
            }
        });
        Self {
            pillars,
            composite: compute_composite(scores),
            diagnostic_composite: None,
        }
    }

    /// Canonical scores only
    #[must_use]
    pub fn scores(&self) -> CategoryMap<PillarScore> {
        self.pillars.map(|_, p| p.score)
    }

    /// Band of the canonical composite
    #[must_use]
    pub const fn overall_band(&self) -> OverallBand {
        OverallBand::from_composite(self.composite.value)
    }
}
