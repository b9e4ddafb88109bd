//! Insight generation.
//!
//! Text is selected from fixed tables, never generated: the same category,
//! score and signals always produce byte-identical copy.
//!
//! - [`generate_insight`]: strength / opportunity / action per (category, tier)
//! - [`describe_gap`]: one paragraph per (category, severity), for the free tier
//! - [`select_modifiers`]: up to three signal-gated sentences per category
//! - [`upsell_copy`] and [`overall_narrative`]: whole-assessment copy

mod generator;
mod modifiers;
mod narrative;
mod tables;

pub use generator::{describe_gap, describe_key, generate_insight, CategoryInsight, FALLBACK_INSIGHT};
pub use modifiers::{append_modifiers, select_modifiers, ModifierRule, MAX_MODIFIERS, MODIFIER_RULES};
pub use narrative::{overall_narrative, upsell_copy, Upsell, UPSELL_CALL_TO_ACTION};
pub use tables::{gap_paragraph, insight_template, InsightTemplate};

use crate::model::{CategoryMap, ContextSignals};
use crate::scoring::ScoreCard;
use serde::Serialize;

/// All copy derived from one score card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightBundle {
    pub insights: CategoryMap<CategoryInsight>,
    /// Severity paragraph per category
    pub diagnoses: CategoryMap<String>,
    pub narrative: String,
    pub upsell: Upsell,
}

impl InsightBundle {
    /// Generate every piece of copy for a score card.
    #[must_use]
    pub fn generate(card: &ScoreCard, signals: &ContextSignals) -> Self {
        let scores = card.scores();
        Self {
            insights: card
                .pillars
                .map(|category, pillar| generate_insight(category, pillar.score, signals)),
            diagnoses: card
                .pillars
                .map(|category, pillar| describe_gap(category, pillar.severity, signals)),
            narrative: overall_narrative(&card.composite),
            upsell: upsell_copy(&scores, signals),
        }
    }
}
