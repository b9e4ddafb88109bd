//! Raw assessment input: sub-criterion ratings as supplied by the caller.

use super::category::Category;
use crate::error::{AlignmentError, Result};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Ratings keyed by sub-criterion name (see [`Category::sub_criteria`]).
///
/// Ratings are intended to lie in 1–5 but are stored as given; clamping and
/// validation happen in the normalizer so that the input is never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct RawAssessmentInput {
    ratings: IndexMap<String, f64>,
}

impl RawAssessmentInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Input where every one of the 25 sub-criteria has the same rating.
    #[must_use]
    pub fn uniform(rating: f64) -> Self {
        Category::ALL
            .iter()
            .flat_map(|c| c.sub_criteria())
            .map(|name| (name.to_string(), rating))
            .collect()
    }

    /// Input where each category's five sub-criteria share one rating.
    #[must_use]
    pub fn per_category(rating: impl Fn(Category) -> f64) -> Self {
        Category::ALL
            .iter()
            .flat_map(|&c| c.sub_criteria().map(|name| (name.to_string(), rating(c))))
            .collect()
    }

    /// Set a single rating.
    #[must_use]
    pub fn with_rating(mut self, sub_criterion: impl Into<String>, rating: f64) -> Self {
        self.ratings.insert(sub_criterion.into(), rating);
        self
    }

    #[must_use]
    pub fn get(&self, sub_criterion: &str) -> Option<f64> {
        self.ratings.get(sub_criterion).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Reject keys that are not one of the 25 known sub-criteria.
    pub fn check_known_keys(&self) -> Result<()> {
        let unknown: Vec<&str> = self
            .ratings
            .keys()
            .map(String::as_str)
            .filter(|k| Category::for_sub_criterion(k).is_none())
            .collect();
        if unknown.is_empty() {
            Ok(())
        } else {
            Err(AlignmentError::validation(format!(
                "unknown sub-criteria: {}",
                unknown.join(", ")
            )))
        }
    }

    /// The five ratings of one category, in sub-criterion order.
    ///
    /// Fails when a rating is missing; finiteness is checked by the normalizer.
    pub fn category_ratings(&self, category: Category) -> Result<[f64; 5]> {
        let [a, b, c, d, e] = category.sub_criteria();
        let lookup = |name: &str| self.get(name).ok_or_else(|| AlignmentError::missing_rating(name));
        Ok([lookup(a)?, lookup(b)?, lookup(c)?, lookup(d)?, lookup(e)?])
    }
}

impl FromIterator<(String, f64)> for RawAssessmentInput {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            ratings: iter.into_iter().collect(),
        }
    }
}
