//! Per-category insight generation.

use super::modifiers::{append_modifiers, select_modifiers};
use super::tables::{gap_paragraph, insight_template};
use crate::model::{Category, ContextSignals, PillarScore};
use crate::scoring::{classify, Classification, Severity, Tier};
use serde::Serialize;

/// Returned for category keys the tables do not know.
pub const FALLBACK_INSIGHT: &str = "We do not have a detailed read on this area yet. \
Focus first on the categories with the lowest scores, then revisit this one once those gaps are closing.";

/// Fully assembled narrative for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInsight {
    pub category: Category,
    pub score: PillarScore,
    pub severity: Severity,
    pub tier: Tier,
    pub strength: String,
    /// Base opportunity copy followed by any contextual modifiers
    pub opportunity: String,
    pub action: String,
}

/// Build the tier-keyed insight for one category.
///
/// Modifier sentences selected by `signals` are appended to the opportunity
/// text. Output depends only on the arguments.
#[must_use]
pub fn generate_insight(
    category: Category,
    score: PillarScore,
    signals: &ContextSignals,
) -> CategoryInsight {
    let Classification { severity, tier } = classify(score);
    let template = insight_template(category, tier);
    let modifiers = select_modifiers(category, severity, signals);

    CategoryInsight {
        category,
        score,
        severity,
        tier,
        strength: template.strength.to_string(),
        opportunity: append_modifiers(template.opportunity, &modifiers),
        action: template.action.to_string(),
    }
}

/// Severity-keyed paragraph with modifiers, used by the baseline tier.
#[must_use]
pub fn describe_gap(category: Category, severity: Severity, signals: &ContextSignals) -> String {
    let modifiers = select_modifiers(category, severity, signals);
    append_modifiers(gap_paragraph(category, severity), &modifiers)
}

/// Severity paragraph looked up by category key.
///
/// Unknown keys get [`FALLBACK_INSIGHT`] instead of an error.
#[must_use]
pub fn describe_key(key: &str, score: PillarScore, signals: &ContextSignals) -> String {
    match Category::from_key(key) {
        Some(category) => describe_gap(category, classify(score).severity, signals),
        None => {
            tracing::debug!(key, "no insight table for category key, using fallback");
            FALLBACK_INSIGHT.to_string()
        }
    }
}
