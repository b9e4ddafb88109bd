//! Category score types and the conversions between their scales.
//!
//! Two scales exist:
//!
//! - **raw** (5–25): the sum of five sub-ratings, each clamped to 1–5
//! - **canonical** (1–20): what every classifier, threshold and insight uses
//!
//! Raw scores are converted to canonical with `raw × 4 / 5`, rounded half
//! away from zero, so 5 → 4, 15 → 12 and 25 → 20.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category score on the canonical 1–20 scale.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct PillarScore(u8);

impl PillarScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;

    /// Create a score, clamping into 1–20.
    #[must_use]
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Create a score, returning None when outside 1–20.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PillarScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Category score on the raw 5–25 scale (sum of five clamped sub-ratings).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct RawCategoryScore(u8);

impl RawCategoryScore {
    pub const MIN: u8 = 5;
    pub const MAX: u8 = 25;

    /// Create a raw score, clamping into 5–25.
    #[must_use]
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Create a raw score, returning None when outside 5–25.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Convert to the canonical 1–20 scale.
    #[must_use]
    pub fn to_canonical(self) -> PillarScore {
        // Integer half-up rounding of raw * 4 / 5; all operands are positive.
        let scaled = (u32::from(self.0) * 8 + 5) / 10;
        PillarScore::clamped(scaled as u8)
    }
}

impl fmt::Display for RawCategoryScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_to_canonical_endpoints() {
        assert_eq!(RawCategoryScore(5).to_canonical().value(), 4);
        assert_eq!(RawCategoryScore(15).to_canonical().value(), 12);
        assert_eq!(RawCategoryScore(25).to_canonical().value(), 20);
    }

    #[test]
    fn test_raw_to_canonical_rounds_half_up() {
        // 6 * 0.8 = 4.8, 7 * 0.8 = 5.6, 24 * 0.8 = 19.2
        assert_eq!(RawCategoryScore(6).to_canonical().value(), 5);
        assert_eq!(RawCategoryScore(7).to_canonical().value(), 6);
        assert_eq!(RawCategoryScore(24).to_canonical().value(), 19);
    }

    #[test]
    fn test_raw_to_canonical_is_monotonic() {
        let mut previous = 0;
        for raw in RawCategoryScore::MIN..=RawCategoryScore::MAX {
            let canonical = RawCategoryScore(raw).to_canonical().value();
            assert!(canonical >= previous, "{raw} -> {canonical}");
            previous = canonical;
        }
    }

    #[test]
    fn test_range_constructors() {
        assert!(PillarScore::new(0).is_none());
        assert!(PillarScore::new(21).is_none());
        assert_eq!(PillarScore::clamped(0).value(), 1);
        assert_eq!(PillarScore::clamped(99).value(), 20);
        assert!(RawCategoryScore::new(4).is_none());
        assert!(RawCategoryScore::new(26).is_none());
    }

    #[test]
    fn test_display_includes_scale() {
        assert_eq!(PillarScore::clamped(5).to_string(), "5/20");
        assert_eq!(RawCategoryScore(15).to_string(), "15/25");
    }
}
