//! Property-based tests for scoring, classification and analysis.
//!
//! Ensures the scoring core handles arbitrary numeric input without
//! panicking, and that range and ordering invariants hold across random
//! inputs.

use brand_alignment::analysis::{analyze, weakest_category};
use brand_alignment::config::AppConfig;
use brand_alignment::model::{Category, CategoryMap, PillarScore, RawAssessmentInput};
use brand_alignment::pipeline::{evaluate, AssessmentRequest};
use brand_alignment::scoring::{
    classify, compute_composite, normalize_category, normalize_to_canonical_range, Severity,
};
use proptest::prelude::*;

fn canonical_scores() -> impl Strategy<Value = CategoryMap<PillarScore>> {
    proptest::array::uniform5(1u8..=20).prop_map(|values| {
        CategoryMap::from_fn(|c| PillarScore::clamped(values[c.index()]))
    })
}

fn assessment() -> impl Strategy<Value = RawAssessmentInput> {
    proptest::collection::vec(-3.0f64..9.0, 25).prop_map(|ratings| {
        Category::ALL
            .iter()
            .flat_map(|c| c.sub_criteria())
            .zip(ratings)
            .map(|(name, rating)| (name.to_string(), rating))
            .collect()
    })
}

proptest! {
    // 1000 cases because every check here is pure arithmetic and cheap.
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn raw_category_stays_in_range(ratings in proptest::array::uniform5(-1e6f64..1e6)) {
        let raw = normalize_category(ratings).unwrap();
        prop_assert!((5..=25).contains(&raw.value()), "raw {}", raw.value());
        let canonical = raw.to_canonical().value();
        prop_assert!((4..=20).contains(&canonical), "canonical {canonical}");
    }

    #[test]
    fn canonical_range_for_any_finite_value(score in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        let canonical = normalize_to_canonical_range(score).unwrap().value();
        prop_assert!((1..=20).contains(&canonical));
    }

    #[test]
    fn non_finite_ratings_are_rejected(slot in 0usize..5, bad in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)]) {
        let mut ratings = [3.0; 5];
        ratings[slot] = bad;
        prop_assert!(normalize_category(ratings).is_err());
    }

    #[test]
    fn weighted_composite_in_range(scores in canonical_scores()) {
        let composite = compute_composite(&scores);
        prop_assert!(composite.value <= 100);
        prop_assert!(composite.value >= 5);
    }

    #[test]
    fn severity_is_monotonic(a in 1u8..=20, b in 1u8..=20) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low = classify(PillarScore::clamped(low));
        let high = classify(PillarScore::clamped(high));
        // Lower scores are never a lighter gap or a better tier
        prop_assert!(low.severity.priority() <= high.severity.priority());
        prop_assert!(low.tier >= high.tier);
    }

    #[test]
    fn weakest_has_minimum_score(scores in canonical_scores()) {
        let weakest = weakest_category(&scores);
        let min = scores.values().min().copied().unwrap();
        prop_assert_eq!(scores[weakest], min);
        // First in declaration order among ties
        let first = Category::ALL.into_iter().find(|&c| scores[c] == min).unwrap();
        prop_assert_eq!(weakest, first);
    }

    #[test]
    fn opportunities_sorted_ascending(scores in canonical_scores()) {
        let findings = analyze(&scores);
        let opportunities = findings.outlook.opportunities();
        prop_assert!(opportunities.windows(2).all(|w| w[0].score <= w[1].score));
        if findings.outlook.is_healthy() {
            prop_assert!(scores.values().all(|s| s.value() > 14));
        } else {
            prop_assert_eq!(opportunities.len(), Category::COUNT);
        }
        for strong in &findings.strong_categories {
            prop_assert!(scores[*strong].value() >= 16);
        }
    }

    #[test]
    fn evaluate_never_panics_and_is_deterministic(ratings in assessment()) {
        let request = AssessmentRequest::from_ratings(ratings);
        let config = AppConfig::default();
        let first = evaluate(&request, &config).unwrap();
        let second = evaluate(&request, &config).unwrap();
        prop_assert_eq!(&first, &second);

        prop_assert!(first
            .recommendations
            .windows(2)
            .all(|w| (w[0].priority, w[0].score) <= (w[1].priority, w[1].score)));
        for rec in &first.recommendations {
            let expected = match rec.severity {
                Severity::Major => 1,
                Severity::Moderate => 2,
                Severity::Light => 3,
            };
            prop_assert_eq!(rec.priority, expected);
        }
    }
}
