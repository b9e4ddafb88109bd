//! Overall narrative and upsell copy, both derived from the full score set.

use super::generator::describe_gap;
use crate::analysis::weakest_category;
use crate::model::{Category, CategoryMap, ContextSignals, PillarScore};
use crate::scoring::{classify, CompositeScore, OverallBand, Severity};
use serde::Serialize;

/// Fixed call to action closing every upsell message.
pub const UPSELL_CALL_TO_ACTION: &str = "The full Brand Alignment Report shows you exactly how to close this gap, \
with a prioritized plan for every category and the copy to get started today.";

fn band_text(band: OverallBand) -> &'static str {
    match band {
        OverallBand::Excellent => {
            "Your brand is in excellent shape. Your positioning, messaging and proof work together, \
so the work ahead is about protecting that alignment and scaling what already works."
        }
        OverallBand::Strong => {
            "Your brand is strong overall. The foundations are in place, and a few focused improvements \
will turn a good brand into a clearly preferred one."
        }
        OverallBand::Developing => {
            "Your brand is developing. Some pieces are working, but they are not yet pulling in the same \
direction, and buyers feel that inconsistency."
        }
        OverallBand::Opportunity => {
            "Your brand has a significant opportunity ahead. The fundamentals are not yet in place, \
which means focused work on your weakest areas will produce visible results quickly."
        }
    }
}

/// Overall narrative for a composite score.
///
/// The band is taken from the composite's percentage of its own scale, so
/// both composite rules map onto the same four bands.
#[must_use]
pub fn overall_narrative(composite: &CompositeScore) -> String {
    let band = OverallBand::from_composite(composite.percent().round() as u8);
    format!(
        "{} Your overall alignment score is {}/{}.",
        band_text(band),
        composite.value,
        composite.max
    )
}

/// Upsell message built around the weakest category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Upsell {
    pub category: Category,
    pub score: PillarScore,
    pub severity: Severity,
    pub text: String,
}

/// Build the upsell copy for a full score set.
#[must_use]
pub fn upsell_copy(scores: &CategoryMap<PillarScore>, signals: &ContextSignals) -> Upsell {
    let category = weakest_category(scores);
    let score = *scores.get(category);
    let severity = classify(score).severity;
    let insight = describe_gap(category, severity, signals);

    let text = format!(
        "Your biggest opportunity is {key}, which scored {value}/{max}, a {severity} gap. \
{insight} {cta}",
        key = category.key(),
        value = score.value(),
        max = PillarScore::MAX,
        severity = severity.label(),
        cta = UPSELL_CALL_TO_ACTION,
    );

    Upsell {
        category,
        score,
        severity,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::CompositeMethod;

    fn weighted(value: u8) -> CompositeScore {
        CompositeScore {
            value,
            method: CompositeMethod::Weighted,
            max: 100,
        }
    }

    #[test]
    fn test_narrative_bands() {
        assert!(overall_narrative(&weighted(80)).contains("excellent"));
        assert!(overall_narrative(&weighted(60)).contains("strong"));
        assert!(overall_narrative(&weighted(40)).contains("developing"));
        assert!(overall_narrative(&weighted(30)).contains("opportunity"));
    }

    #[test]
    fn test_narrative_on_unweighted_scale() {
        let unweighted = CompositeScore {
            value: 20,
            method: CompositeMethod::Unweighted,
            max: 25,
        };
        let text = overall_narrative(&unweighted);
        assert!(text.contains("excellent"));
        assert!(text.ends_with("20/25."));
    }

    #[test]
    fn test_upsell_names_weakest_category() {
        let scores = CategoryMap::from_fn(|c| {
            PillarScore::clamped(if c == Category::Credibility { 5 } else { 20 })
        });
        let upsell = upsell_copy(&scores, &ContextSignals::new());
        assert_eq!(upsell.category, Category::Credibility);
        assert_eq!(upsell.severity, Severity::Major);
        assert!(upsell.text.contains("credibility"));
        assert!(upsell.text.contains("5/20"));
        assert!(upsell.text.ends_with(UPSELL_CALL_TO_ACTION));
    }
}
