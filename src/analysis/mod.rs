//! Aggregate analysis across all categories.
//!
//! Everything here reads canonical scores; nothing is rescored.

use crate::insights::CategoryInsight;
use crate::model::{Category, CategoryMap, PillarScore};
use crate::scoring::{classify, Severity};
use serde::Serialize;

/// Categories at or above this score are reported as strengths.
pub const STRONG_CATEGORY_MIN: u8 = 16;

/// Categories strictly above this score are in good shape. When every
/// category qualifies, no opportunity list is produced.
pub const GOOD_SHAPE_ABOVE: u8 = 14;

/// Message used in place of an opportunity list when nothing needs work.
pub const ALL_HEALTHY_MESSAGE: &str = "All five categories are in good shape. \
Keep doing what works and revisit this assessment as your market changes.";

/// One category needing attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Opportunity {
    pub category: Category,
    pub score: PillarScore,
    pub severity: Severity,
}

/// Either an ordered opportunity list or the all-healthy message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OpportunityOutlook {
    Healthy { message: String },
    Gaps { opportunities: Vec<Opportunity> },
}

impl OpportunityOutlook {
    /// Opportunities, empty when healthy
    #[must_use]
    pub fn opportunities(&self) -> &[Opportunity] {
        match self {
            Self::Healthy { .. } => &[],
            Self::Gaps { opportunities } => opportunities,
        }
    }

    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy { .. })
    }
}

/// Cross-category findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateFindings {
    pub weakest_category: Category,
    pub strong_categories: Vec<Category>,
    pub outlook: OpportunityOutlook,
}

/// A prioritized next step for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// 1 is most urgent
    pub priority: u8,
    pub category: Category,
    pub score: PillarScore,
    pub severity: Severity,
    pub message: String,
}

/// Lowest-scoring category; ties go to the first in declaration order.
#[must_use]
pub fn weakest_category(scores: &CategoryMap<PillarScore>) -> Category {
    // min_by_key returns the first minimum
    scores
        .iter()
        .min_by_key(|(_, score)| **score)
        .map_or(Category::Positioning, |(category, _)| category)
}

/// Categories scoring at least [`STRONG_CATEGORY_MIN`], in declaration order.
#[must_use]
pub fn strong_categories(scores: &CategoryMap<PillarScore>) -> Vec<Category> {
    scores
        .iter()
        .filter(|(_, score)| score.value() >= STRONG_CATEGORY_MIN)
        .map(|(category, _)| category)
        .collect()
}

/// All categories, ascending by score, or the healthy message when every
/// category is above [`GOOD_SHAPE_ABOVE`].
#[must_use]
pub fn opportunity_outlook(scores: &CategoryMap<PillarScore>) -> OpportunityOutlook {
    if scores.values().all(|s| s.value() > GOOD_SHAPE_ABOVE) {
        return OpportunityOutlook::Healthy {
            message: ALL_HEALTHY_MESSAGE.to_string(),
        };
    }

    let mut opportunities: Vec<Opportunity> = scores
        .iter()
        .map(|(category, &score)| Opportunity {
            category,
            score,
            severity: classify(score).severity,
        })
        .collect();
    // sort_by_key is stable, so equal scores keep declaration order
    opportunities.sort_by_key(|o| o.score);
    OpportunityOutlook::Gaps { opportunities }
}

/// Run the full aggregate analysis.
#[must_use]
pub fn analyze(scores: &CategoryMap<PillarScore>) -> AggregateFindings {
    let findings = AggregateFindings {
        weakest_category: weakest_category(scores),
        strong_categories: strong_categories(scores),
        outlook: opportunity_outlook(scores),
    };
    tracing::debug!(
        weakest = %findings.weakest_category,
        strong = findings.strong_categories.len(),
        opportunities = findings.outlook.opportunities().len(),
        "aggregate analysis complete"
    );
    findings
}

/// One recommendation per opportunity, carrying that category's action.
///
/// Sorted by priority, then score, then declaration order.
#[must_use]
pub fn build_recommendations(
    findings: &AggregateFindings,
    insights: &CategoryMap<CategoryInsight>,
) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = findings
        .outlook
        .opportunities()
        .iter()
        .map(|o| Recommendation {
            priority: o.severity.priority(),
            category: o.category,
            score: o.score,
            severity: o.severity,
            message: insights[o.category].action.clone(),
        })
        .collect();
    recommendations.sort_by_key(|r| (r.priority, r.score, r.category));
    recommendations
}
