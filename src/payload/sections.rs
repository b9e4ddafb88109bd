//! Paid-tier payload sections.
//!
//! Sections only rearrange numbers already on the score card and text
//! already in the insight bundle. Nothing here scores or classifies.

use super::inputs::{cleaned, Competitor, TierInputs};
use super::templates::{prompt_templates, quarter_objective, substitute_brand, AEO_CHECKS};
use crate::insights::InsightBundle;
use crate::model::{Category, CategoryMap, ContextSignals, PillarScore};
use crate::scoring::{normalize_to_canonical_range, ScoreCard, Severity, Tier};
use serde::Serialize;

// ============================================================================
// Extended
// ============================================================================

/// One answer-engine readiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AeoCheck {
    pub check: &'static str,
    pub passed: bool,
}

/// Visibility and answer-engine optimization detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibilityBlock {
    pub score: PillarScore,
    pub severity: Severity,
    pub tier: Tier,
    /// Share of passed checks, 0–100
    pub aeo_readiness: u8,
    pub checks: Vec<AeoCheck>,
    pub opportunity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedSection {
    /// Share of optional context fields supplied, 0–100
    pub context_completeness: u8,
    pub missing_context: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub competitors: Vec<Competitor>,
    pub visibility: VisibilityBlock,
}

pub(super) fn extended_section(
    card: &ScoreCard,
    bundle: &InsightBundle,
    inputs: &TierInputs,
    signals: &ContextSignals,
) -> ExtendedSection {
    let checks: Vec<AeoCheck> = AEO_CHECKS
        .iter()
        .map(|&(signal, check)| AeoCheck {
            check,
            passed: !signals.contains(signal),
        })
        .collect();
    let passed = checks.iter().filter(|c| c.passed).count();
    let aeo_readiness = ((passed * 200 + checks.len()) / (checks.len() * 2)) as u8;

    let pillar = card.pillars[Category::Visibility];
    ExtendedSection {
        context_completeness: inputs.completeness_percent(),
        missing_context: inputs.missing_fields(),
        audience: cleaned(&inputs.audience),
        competitors: inputs.named_competitors(),
        visibility: VisibilityBlock {
            score: pillar.score,
            severity: pillar.severity,
            tier: pillar.tier,
            aeo_readiness,
            checks,
            opportunity: bundle.insights[Category::Visibility].opportunity.clone(),
        },
    }
}

// ============================================================================
// Full
// ============================================================================

/// Brand foundation as supplied by the respondent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BrandFoundation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positioning_statement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archetype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_direction: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub palette: Vec<String>,
}

/// One ranked entry of the flat action plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionItem {
    /// 1-based position in the plan
    pub rank: usize,
    pub category: Category,
    pub score: PillarScore,
    pub severity: Severity,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FullSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_foundation: Option<BrandFoundation>,
    pub action_plan: Vec<ActionItem>,
}

/// Every category, most urgent first: severity, then score, then
/// declaration order.
pub(super) fn ranked_categories(card: &ScoreCard) -> Vec<Category> {
    let mut ranked: Vec<Category> = Category::ALL.to_vec();
    ranked.sort_by_key(|&c| {
        let pillar = card.pillars[c];
        (pillar.severity.priority(), pillar.score, c)
    });
    ranked
}

pub(super) fn full_section(
    card: &ScoreCard,
    bundle: &InsightBundle,
    inputs: &TierInputs,
    ranked: &[Category],
) -> FullSection {
    let brand_foundation = inputs.has_foundation().then(|| BrandFoundation {
        mission: cleaned(&inputs.mission),
        positioning_statement: cleaned(&inputs.positioning_statement),
        persona: cleaned(&inputs.persona),
        archetype: cleaned(&inputs.archetype),
        visual_direction: cleaned(&inputs.visual_direction),
        palette: inputs.palette_entries(),
    });

    let action_plan = ranked
        .iter()
        .enumerate()
        .map(|(i, &category)| {
            let pillar = card.pillars[category];
            ActionItem {
                rank: i + 1,
                category,
                score: pillar.score,
                severity: pillar.severity,
                action: bundle.insights[category].action.clone(),
            }
        })
        .collect();

    FullSection {
        brand_foundation,
        action_plan,
    }
}

// ============================================================================
// Complete
// ============================================================================

/// One 30-day window of the 90-day roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapPhase {
    pub start_day: u16,
    pub end_day: u16,
    pub focus: Vec<Category>,
    pub actions: Vec<String>,
}

/// One quarter of the 12-month roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuarterPlan {
    pub quarter: u8,
    pub focus: Vec<Category>,
    pub objectives: Vec<&'static str>,
    pub milestones: Vec<String>,
}

/// A position on the competitive map, both axes on the 1–20 scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapPoint {
    pub name: String,
    pub x: u8,
    pub y: u8,
}

impl MapPoint {
    /// Place a competitor from its estimates. `None` unless both axes are
    /// scored.
    fn for_competitor(competitor: &Competitor) -> Option<Self> {
        let x = normalize_to_canonical_range(competitor.positioning?).ok()?;
        let y = normalize_to_canonical_range(competitor.credibility?).ok()?;
        Some(Self {
            name: competitor.name.trim().to_string(),
            x: x.value(),
            y: y.value(),
        })
    }
}

/// Brand placed on differentiation (x) against credibility (y), alongside
/// every named competitor that carries both estimates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompetitiveMap {
    pub x_axis: Category,
    pub y_axis: Category,
    pub brand: MapPoint,
    pub competitors: Vec<MapPoint>,
    /// Named competitors without both estimates
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unplaced: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompleteSection {
    pub roadmap_90_day: Vec<RoadmapPhase>,
    pub roadmap_12_month: Vec<QuarterPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competitive_map: Option<CompetitiveMap>,
    pub prompt_packs: CategoryMap<Vec<String>>,
}

/// Rank ranges per 30-day phase
const PHASES: [(u16, u16, std::ops::Range<usize>); 3] = [(1, 30, 0..2), (31, 60, 2..4), (61, 90, 4..5)];

/// Rank ranges per quarter
const QUARTERS: [std::ops::Range<usize>; 4] = [0..1, 1..2, 2..3, 3..5];

pub(super) fn complete_section(
    card: &ScoreCard,
    bundle: &InsightBundle,
    inputs: &TierInputs,
    ranked: &[Category],
) -> CompleteSection {
    let actions_for = |focus: &[Category]| -> Vec<String> {
        focus
            .iter()
            .map(|&c| bundle.insights[c].action.clone())
            .collect()
    };

    let roadmap_90_day = PHASES
        .iter()
        .map(|(start_day, end_day, ranks)| {
            let focus = ranked[ranks.clone()].to_vec();
            RoadmapPhase {
                start_day: *start_day,
                end_day: *end_day,
                actions: actions_for(&focus),
                focus,
            }
        })
        .collect();

    let roadmap_12_month = QUARTERS
        .iter()
        .enumerate()
        .map(|(i, ranks)| {
            let focus = ranked[ranks.clone()].to_vec();
            QuarterPlan {
                quarter: i as u8 + 1,
                objectives: focus.iter().map(|&c| quarter_objective(c)).collect(),
                milestones: actions_for(&focus),
                focus,
            }
        })
        .collect();

    let brand = inputs.brand();
    let named = inputs.named_competitors();
    let competitive_map = (!named.is_empty()).then(|| {
        let mut competitors = Vec::new();
        let mut unplaced = Vec::new();
        for competitor in &named {
            match MapPoint::for_competitor(competitor) {
                Some(point) => competitors.push(point),
                None => unplaced.push(competitor.name.trim().to_string()),
            }
        }
        CompetitiveMap {
            x_axis: Category::Positioning,
            y_axis: Category::Credibility,
            brand: MapPoint {
                name: brand.unwrap_or("You").to_string(),
                x: card.pillars[Category::Positioning].score.value(),
                y: card.pillars[Category::Credibility].score.value(),
            },
            competitors,
            unplaced,
        }
    });

    let prompt_packs = CategoryMap::from_fn(|category| {
        prompt_templates(category)
            .iter()
            .map(|t| substitute_brand(t, brand))
            .collect()
    });

    CompleteSection {
        roadmap_90_day,
        roadmap_12_month,
        competitive_map,
        prompt_packs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Signal;

    fn card(values: [u8; 5]) -> ScoreCard {
        ScoreCard::from_canonical(&CategoryMap::from_fn(|c| {
            PillarScore::clamped(values[c.index()])
        }))
    }

    #[test]
    fn test_ranked_categories_by_severity_then_score() {
        let ranked = ranked_categories(&card([12, 4, 18, 8, 12]));
        assert_eq!(
            ranked,
            vec![
                Category::Messaging,
                Category::Credibility,
                Category::Positioning,
                Category::Conversion,
                Category::Visibility,
            ]
        );
    }

    #[test]
    fn test_aeo_readiness_counts_absent_signals() {
        let c = card([10; 5]);
        let bundle = InsightBundle::generate(&c, &ContextSignals::new());
        let all_pass = extended_section(&c, &bundle, &TierInputs::default(), &ContextSignals::new());
        assert_eq!(all_pass.visibility.aeo_readiness, 100);

        let signals = ContextSignals::new()
            .with(Signal::NoWebsite)
            .with(Signal::NotIndexedByAi);
        let bundle = InsightBundle::generate(&c, &signals);
        let partial = extended_section(&c, &bundle, &TierInputs::default(), &signals);
        assert_eq!(partial.visibility.aeo_readiness, 60);
        assert!(!partial.visibility.checks[0].passed);
        assert!(partial.competitors.is_empty());
    }

    #[test]
    fn test_roadmaps_cover_every_category_once() {
        let c = card([3, 9, 14, 17, 20]);
        let bundle = InsightBundle::generate(&c, &ContextSignals::new());
        let ranked = ranked_categories(&c);
        let section = complete_section(&c, &bundle, &TierInputs::default(), &ranked);

        let phased: Vec<Category> = section
            .roadmap_90_day
            .iter()
            .flat_map(|p| p.focus.clone())
            .collect();
        assert_eq!(phased, ranked);
        let quarterly: Vec<Category> = section
            .roadmap_12_month
            .iter()
            .flat_map(|q| q.focus.clone())
            .collect();
        assert_eq!(quarterly, ranked);
        assert_eq!(section.roadmap_90_day[2].end_day, 90);
        assert!(section.competitive_map.is_none());
    }

    #[test]
    fn test_prompt_packs_substitute_brand() {
        let c = card([10; 5]);
        let bundle = InsightBundle::generate(&c, &ContextSignals::new());
        let inputs = TierInputs {
            brand_name: Some("Acme Bakery".into()),
            competitors: vec![Competitor::new("Globex")],
            ..TierInputs::default()
        };
        let section = complete_section(&c, &bundle, &inputs, &ranked_categories(&c));
        for prompts in section.prompt_packs.values() {
            assert_eq!(prompts.len(), 3);
            assert!(prompts.iter().all(|p| p.contains("Acme Bakery") && !p.contains("{brand}")));
        }
        let map = section.competitive_map.unwrap();
        assert_eq!(map.brand.name, "Acme Bakery");
        assert_eq!((map.brand.x, map.brand.y), (10, 10));
    }

    #[test]
    fn test_competitors_placed_on_map() {
        let c = card([10; 5]);
        let bundle = InsightBundle::generate(&c, &ContextSignals::new());
        let inputs = TierInputs {
            competitors: vec![
                Competitor::new("Globex").with_scores(14.0, 6.0),
                Competitor::new("Initech").with_scores(85.0, 40.0),
                Competitor::new("Umbrella"),
                Competitor::new("   ").with_scores(5.0, 5.0),
            ],
            ..TierInputs::default()
        };
        let section = complete_section(&c, &bundle, &inputs, &ranked_categories(&c));
        let map = section.competitive_map.unwrap();
        assert_eq!(map.brand.name, "You");
        assert_eq!(
            map.competitors,
            vec![
                MapPoint { name: "Globex".into(), x: 14, y: 6 },
                MapPoint { name: "Initech".into(), x: 17, y: 8 },
            ]
        );
        assert_eq!(map.unplaced, vec!["Umbrella".to_string()]);
    }

    #[test]
    fn test_blank_competitors_build_no_map() {
        let c = card([10; 5]);
        let bundle = InsightBundle::generate(&c, &ContextSignals::new());
        let inputs = TierInputs {
            competitors: vec![Competitor::new(""), Competitor::new("  ")],
            palette: vec!["".into()],
            ..TierInputs::default()
        };
        let ranked = ranked_categories(&c);
        assert!(complete_section(&c, &bundle, &inputs, &ranked).competitive_map.is_none());
        assert!(extended_section(&c, &bundle, &inputs, &ContextSignals::new()).competitors.is_empty());
        assert!(full_section(&c, &bundle, &inputs, &ranked).brand_foundation.is_none());
    }
}
