//! Input normalization: ratings to raw category scores, and arbitrary
//! pre-aggregated scores to the canonical 1–20 scale.

use crate::error::{AlignmentError, ErrorContext, OptionContext, Result};
use crate::model::{Category, CategoryMap, PillarScore, RawAssessmentInput, RawCategoryScore};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lowest accepted sub-rating; smaller values are clamped up to it.
pub const RATING_MIN: f64 = 1.0;
/// Highest accepted sub-rating; larger values are clamped down to it.
pub const RATING_MAX: f64 = 5.0;

/// Clamp a single sub-rating into 1–5 and round it to a whole point.
///
/// Non-finite values are rejected rather than coerced.
pub fn clamp_rating(rating: f64) -> Result<u8> {
    if !rating.is_finite() {
        return Err(AlignmentError::validation(format!(
            "sub-rating is not a finite number ({rating})"
        )));
    }
    Ok(rating.clamp(RATING_MIN, RATING_MAX).round() as u8)
}

/// Sum five sub-ratings, each clamped to 1–5, into a raw 5–25 score.
pub fn normalize_category(sub_ratings: [f64; 5]) -> Result<RawCategoryScore> {
    let mut sum: u8 = 0;
    for rating in sub_ratings {
        sum += clamp_rating(rating)?;
    }
    Ok(RawCategoryScore::clamped(sum))
}

/// Normalize every category of a raw assessment.
///
/// Unknown sub-criteria, missing ratings and non-finite ratings all fail;
/// the error names the offending sub-criterion.
pub fn normalize_assessment(input: &RawAssessmentInput) -> Result<CategoryMap<RawCategoryScore>> {
    input.check_known_keys()?;
    CategoryMap::try_from_fn(|category| {
        let ratings = input.category_ratings(category)?;
        for (name, rating) in category.sub_criteria().iter().zip(ratings) {
            if !rating.is_finite() {
                return Err(AlignmentError::non_finite_rating(name, rating));
            }
        }
        normalize_category(ratings)
    })
}

/// Rescale a pre-aggregated score of unknown scale onto 1–20.
///
/// - already within 1–20: rounded
/// - within 0–100: scaled by 20/100 and rounded (never below 1)
/// - anything else: clamped to 1–20
///
/// A value such as 15 is ambiguous between the two scales and is read as
/// 1–20; callers that know their scale should use [`ScoreScale`] instead.
pub fn normalize_to_canonical_range(score: f64) -> Result<PillarScore> {
    if !score.is_finite() {
        return Err(AlignmentError::validation(format!(
            "score is not a finite number ({score})"
        )));
    }

    let min = f64::from(PillarScore::MIN);
    let max = f64::from(PillarScore::MAX);
    let canonical = if (min..=max).contains(&score) {
        score.round()
    } else if (0.0..=100.0).contains(&score) {
        (score * max / 100.0).round()
    } else {
        score.clamp(min, max)
    };
    Ok(PillarScore::clamped(canonical as u8))
}

/// Scale of a pre-aggregated category score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScoreScale {
    /// Detect the scale per value with [`normalize_to_canonical_range`]
    #[default]
    Auto,
    /// Already on 1–20
    Canonical,
    /// 0–100 percentage
    Percent,
    /// Raw 5–25 sum of sub-ratings
    Raw,
}

impl ScoreScale {
    /// Convert a value on this scale to the canonical 1–20 scale.
    pub fn to_canonical(self, score: f64) -> Result<PillarScore> {
        if !score.is_finite() {
            return Err(AlignmentError::validation(format!(
                "score is not a finite number ({score})"
            )));
        }
        let canonical = match self {
            Self::Auto => return normalize_to_canonical_range(score),
            Self::Canonical => PillarScore::clamped(score.round().clamp(0.0, 255.0) as u8),
            Self::Percent => {
                let scaled = (score.clamp(0.0, 100.0) * f64::from(PillarScore::MAX) / 100.0).round();
                PillarScore::clamped(scaled as u8)
            }
            Self::Raw => return raw_from_value(score).map(RawCategoryScore::to_canonical),
        };
        Ok(canonical)
    }
}

/// Read a pre-aggregated value as a raw 5–25 category score, clamping and
/// rounding finite values.
pub fn raw_from_value(score: f64) -> Result<RawCategoryScore> {
    if !score.is_finite() {
        return Err(AlignmentError::validation(format!(
            "score is not a finite number ({score})"
        )));
    }
    let raw = score
        .round()
        .clamp(f64::from(RawCategoryScore::MIN), f64::from(RawCategoryScore::MAX));
    Ok(RawCategoryScore::clamped(raw as u8))
}

/// One value per category from `(key, value)` pairs.
///
/// Keys match case-insensitively. Unknown keys, a category given twice and
/// a missing category all fail.
fn collect_by_category<'a, I>(scores: I) -> Result<CategoryMap<f64>>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut found: [Option<f64>; Category::COUNT] = [None; Category::COUNT];
    for (key, value) in scores {
        let category = Category::from_key(key)
            .ok_or_else(|| AlignmentError::validation(format!("unknown category '{key}'")))?;
        if found[category.index()].replace(value).is_some() {
            return Err(AlignmentError::validation(format!(
                "duplicate score for category '{}' (key '{key}')",
                category.key()
            )));
        }
    }

    CategoryMap::try_from_fn(|category| {
        found[category.index()]
            .with_context_none(|| format!("missing score for category '{}'", category.key()))
    })
}

/// Normalize a map of pre-aggregated scores keyed by category key.
///
/// Every category must be present; unknown keys are rejected.
pub fn normalize_scores<'a, I>(scores: I, scale: ScoreScale) -> Result<CategoryMap<PillarScore>>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let values = collect_by_category(scores)?;
    CategoryMap::try_from_fn(|category| {
        scale.to_canonical(values[category]).context(category.key())
    })
}

/// Read a map of raw 5–25 category scores, keeping the raw scale.
///
/// Same key rules as [`normalize_scores`].
pub fn normalize_raw_scores<'a, I>(scores: I) -> Result<CategoryMap<RawCategoryScore>>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let values = collect_by_category(scores)?;
    CategoryMap::try_from_fn(|category| raw_from_value(values[category]).context(category.key()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_rating_bounds() {
        assert_eq!(clamp_rating(0.0).unwrap(), 1);
        assert_eq!(clamp_rating(-7.0).unwrap(), 1);
        assert_eq!(clamp_rating(9.0).unwrap(), 5);
        assert_eq!(clamp_rating(3.0).unwrap(), 3);
        assert_eq!(clamp_rating(3.5).unwrap(), 4);
    }

    #[test]
    fn test_clamp_rating_rejects_nan() {
        assert!(clamp_rating(f64::NAN).is_err());
        assert!(clamp_rating(f64::INFINITY).is_err());
    }

    #[test]
    fn test_normalize_category_sums() {
        assert_eq!(normalize_category([3.0; 5]).unwrap().value(), 15);
        assert_eq!(normalize_category([1.0; 5]).unwrap().value(), 5);
        assert_eq!(normalize_category([5.0; 5]).unwrap().value(), 25);
        assert_eq!(
            normalize_category([0.0, 10.0, 2.0, 3.0, 4.0]).unwrap().value(),
            15
        );
    }

    #[test]
    fn test_normalize_assessment_names_nan_sub_criterion() {
        let input = RawAssessmentInput::uniform(3.0).with_rating("case_studies", f64::NAN);
        let err = normalize_assessment(&input).unwrap_err();
        assert!(err.to_string().contains("case_studies"), "{err}");
    }

    #[test]
    fn test_canonical_range_paths() {
        assert_eq!(normalize_to_canonical_range(12.4).unwrap().value(), 12);
        assert_eq!(normalize_to_canonical_range(1.0).unwrap().value(), 1);
        assert_eq!(normalize_to_canonical_range(20.0).unwrap().value(), 20);
        // 0–100 path
        assert_eq!(normalize_to_canonical_range(85.0).unwrap().value(), 17);
        assert_eq!(normalize_to_canonical_range(100.0).unwrap().value(), 20);
        assert_eq!(normalize_to_canonical_range(0.0).unwrap().value(), 1);
        // clamp path
        assert_eq!(normalize_to_canonical_range(-3.0).unwrap().value(), 1);
        assert_eq!(normalize_to_canonical_range(250.0).unwrap().value(), 20);
    }

    #[test]
    fn test_canonical_range_rejects_nan() {
        assert!(normalize_to_canonical_range(f64::NAN).is_err());
    }

    #[test]
    fn test_explicit_scales() {
        assert_eq!(ScoreScale::Percent.to_canonical(15.0).unwrap().value(), 3);
        assert_eq!(ScoreScale::Auto.to_canonical(15.0).unwrap().value(), 15);
        assert_eq!(ScoreScale::Raw.to_canonical(25.0).unwrap().value(), 20);
        assert_eq!(ScoreScale::Raw.to_canonical(2.0).unwrap().value(), 4);
        assert_eq!(ScoreScale::Canonical.to_canonical(42.0).unwrap().value(), 20);
    }

    #[test]
    fn test_normalize_scores_requires_every_category() {
        let partial = [("positioning", 10.0), ("messaging", 10.0)];
        let err = normalize_scores(partial, ScoreScale::Auto).unwrap_err();
        assert!(err.to_string().contains("visibility"), "{err}");
    }

    #[test]
    fn test_normalize_scores_rejects_case_insensitive_duplicates() {
        let scores = [
            ("Positioning", 4.0),
            ("messaging", 10.0),
            ("visibility", 10.0),
            ("credibility", 10.0),
            ("conversion", 10.0),
            ("positioning", 18.0),
        ];
        let err = normalize_scores(scores, ScoreScale::Canonical).unwrap_err();
        assert!(matches!(err, AlignmentError::Validation(_)));
        assert!(err.to_string().contains("duplicate score for category 'positioning'"), "{err}");
        assert!(normalize_raw_scores(scores).is_err());
    }

    #[test]
    fn test_normalize_raw_scores_keeps_raw_scale() {
        let scores = [
            ("positioning", 15.0),
            ("messaging", 25.0),
            ("visibility", 2.0),
            ("credibility", 14.6),
            ("conversion", 40.0),
        ];
        let raw = normalize_raw_scores(scores).unwrap();
        let values: Vec<u8> = raw.values().map(|r| r.value()).collect();
        assert_eq!(values, vec![15, 25, 5, 15, 25]);

        let mut with_nan = scores;
        with_nan[3].1 = f64::NAN;
        let err = normalize_raw_scores(with_nan).unwrap_err();
        assert!(err.to_string().contains("credibility"), "{err}");
    }

    #[test]
    fn test_normalize_scores_rejects_unknown_category() {
        let scores = [("pricing", 10.0)];
        assert!(normalize_scores(scores, ScoreScale::Auto).is_err());
    }
}
