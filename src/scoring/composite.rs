//! Composite score calculation.
//!
//! Two aggregation rules exist and produce numbers on different scales:
//!
//! | rule        | input scale | output scale | used for                      |
//! |-------------|-------------|--------------|-------------------------------|
//! | weighted    | 1–20        | 0–100        | canonical composite, all tiers |
//! | unweighted  | 5–25        | 5–25         | diagnostic composite           |
//!
//! They are not interchangeable: all ratings of 3 give a weighted composite
//! of 60 but an unweighted composite of 15 (out of 25, i.e. 60%), while a
//! skewed profile can rank differently under each rule because the weighted
//! rule favours positioning and messaging.

use crate::model::{Category, CategoryMap, PillarScore, RawCategoryScore};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which aggregation rule produced a composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CompositeMethod {
    /// Fixed-weight sum of canonical scores, scaled to 0–100
    Weighted,
    /// Mean of raw 5–25 scores
    Unweighted,
}

/// An overall score together with the rule and scale that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeScore {
    pub value: u8,
    pub method: CompositeMethod,
    /// Upper bound of the scale `value` is on
    pub max: u8,
}

impl CompositeScore {
    /// Upper bound of the weighted composite scale
    pub const WEIGHTED_MAX: u8 = 100;

    /// Value as a percentage of its scale's maximum
    #[must_use]
    pub fn percent(&self) -> f64 {
        f64::from(self.value) * 100.0 / f64::from(self.max)
    }
}

/// Weighted composite on 0–100: `round(5 × Σ score × weight)`.
///
/// Computed in integer arithmetic on whole-percent weights, so the result
/// does not depend on floating-point summation order.
#[must_use]
pub fn compute_composite(scores: &CategoryMap<PillarScore>) -> CompositeScore {
    // 5 × Σ(score × pct / 100) == Σ(score × pct) / 20
    let weighted_sum: u32 = scores
        .iter()
        .map(|(category, score)| u32::from(score.value()) * category.weight_percent())
        .sum();
    let value = ((weighted_sum + 10) / 20).min(u32::from(CompositeScore::WEIGHTED_MAX));

    CompositeScore {
        value: value as u8,
        method: CompositeMethod::Weighted,
        max: CompositeScore::WEIGHTED_MAX,
    }
}

/// Unweighted composite on 5–25: the rounded mean of the raw category scores.
#[must_use]
pub fn compute_unweighted_composite(scores: &CategoryMap<RawCategoryScore>) -> CompositeScore {
    let sum: u32 = scores.values().map(|s| u32::from(s.value())).sum();
    let count = Category::COUNT as u32;
    // Half-up rounding of sum / count
    let value = (sum * 2 + count) / (count * 2);

    CompositeScore {
        value: value as u8,
        method: CompositeMethod::Unweighted,
        max: RawCategoryScore::MAX,
    }
}
