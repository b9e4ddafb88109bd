//! Tier-specific report payload assembly.
//!
//! [`assemble`] packages an already-scored card and its insight bundle. The
//! scoring fields are identical for every tier; higher tiers only add
//! sections. Missing optional inputs drop the matching fields.

mod inputs;
mod sections;
mod templates;
mod tier;

pub use inputs::{Competitor, TierInputs};
pub use sections::{
    ActionItem, AeoCheck, BrandFoundation, CompetitiveMap, CompleteSection, ExtendedSection,
    FullSection, MapPoint, QuarterPlan, RoadmapPhase, VisibilityBlock,
};
pub use templates::{substitute_brand, BRAND_PLACEHOLDER, DEFAULT_BRAND};
pub use tier::ProductTier;

use crate::analysis::{build_recommendations, AggregateFindings, Recommendation};
use crate::insights::{InsightBundle, Upsell};
use crate::model::{CategoryMap, ContextSignals, PillarScore, RawCategoryScore};
use crate::scoring::{CompositeScore, OverallBand, ScoreCard, Severity, Tier, SCORING_ENGINE_VERSION};
use serde::Serialize;

/// Everything the report says about one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillarReport {
    pub score: PillarScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<RawCategoryScore>,
    pub severity: Severity,
    pub tier: Tier,
    /// Severity paragraph with modifiers
    pub diagnosis: String,
    pub strength: String,
    pub opportunity: String,
    pub action: String,
}

/// A finished report, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportPayload {
    pub product_tier: ProductTier,
    pub scoring_engine_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    pub composite: CompositeScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic_composite: Option<CompositeScore>,
    pub overall_band: OverallBand,
    pub narrative: String,
    pub pillars: CategoryMap<PillarReport>,
    pub findings: AggregateFindings,
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upsell: Option<Upsell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended: Option<ExtendedSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<FullSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete: Option<CompleteSection>,
}

impl ReportPayload {
    /// Canonical score per category, as assembled
    #[must_use]
    pub fn scores(&self) -> CategoryMap<PillarScore> {
        self.pillars.map(|_, p| p.score)
    }
}

/// Build the payload for `tier`.
///
/// `inputs` may be None for any tier; paid sections are still produced from
/// the scores, with free-text fields omitted.
#[must_use]
pub fn assemble(
    tier: ProductTier,
    card: &ScoreCard,
    bundle: &InsightBundle,
    findings: &AggregateFindings,
    inputs: Option<&TierInputs>,
    signals: &ContextSignals,
) -> ReportPayload {
    let default_inputs = TierInputs::default();
    let inputs = inputs.unwrap_or(&default_inputs);

    let pillars = card.pillars.map(|category, pillar| {
        let insight = &bundle.insights[category];
        PillarReport {
            score: pillar.score,
            raw: pillar.raw,
            severity: pillar.severity,
            tier: pillar.tier,
            diagnosis: bundle.diagnoses[category].clone(),
            strength: insight.strength.clone(),
            opportunity: insight.opportunity.clone(),
            action: insight.action.clone(),
        }
    });

    let ranked = sections::ranked_categories(card);
    let extended = tier
        .includes(ProductTier::Extended)
        .then(|| sections::extended_section(card, bundle, inputs, signals));
    let full = tier
        .includes(ProductTier::Full)
        .then(|| sections::full_section(card, bundle, inputs, &ranked));
    let complete = tier
        .includes(ProductTier::Complete)
        .then(|| sections::complete_section(card, bundle, inputs, &ranked));

    tracing::debug!(
        tier = %tier,
        composite = card.composite.value,
        "assembled report payload"
    );

    ReportPayload {
        product_tier: tier,
        scoring_engine_version: SCORING_ENGINE_VERSION,
        brand_name: inputs.brand().map(str::to_string),
        composite: card.composite,
        diagnostic_composite: card.diagnostic_composite,
        overall_band: card.overall_band(),
        narrative: bundle.narrative.clone(),
        pillars,
        findings: findings.clone(),
        recommendations: build_recommendations(findings, &bundle.insights),
        upsell: tier.has_upsell().then(|| bundle.upsell.clone()),
        extended,
        full,
        complete,
    }
}
