//! Severity and tier classification on the canonical 1–20 scale.
//!
//! Two threshold tables are in use and they overlap but do not agree:
//!
//! | score | tier table              | gap-severity table |
//! |-------|-------------------------|--------------------|
//! | 18–20 | excellent (light)       | light              |
//! | 15–17 | strong (light)          | light              |
//! | 13–14 | developing (moderate)   | light              |
//! | 11–12 | developing (moderate)   | moderate           |
//! | 9–10  | needs_focus (major)     | moderate           |
//! | 1–8   | needs_focus (major)     | major              |
//!
//! [`classify`] takes the tier from the tier table and the severity from the
//! gap-severity table. The tier table's own notion of severity is still
//! available as [`Tier::implied_severity`].

use crate::model::PillarScore;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum score for [`Tier::Excellent`]
pub const EXCELLENT_MIN: u8 = 18;
/// Minimum score for [`Tier::Strong`]
pub const STRONG_MIN: u8 = 15;
/// Minimum score for [`Tier::Developing`]
pub const DEVELOPING_MIN: u8 = 11;
/// Highest score still classed as a [`Severity::Major`] gap
pub const MAJOR_GAP_MAX: u8 = 8;
/// Highest score still classed as a [`Severity::Moderate`] gap
pub const MODERATE_GAP_MAX: u8 = 12;

/// How large a gap a category score represents.
///
/// Ordered from most to least severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Major,
    Moderate,
    Light,
}

impl Severity {
    pub const ALL: [Self; 3] = [Self::Major, Self::Moderate, Self::Light];

    /// Gap-severity table: ≤8 major, 9–12 moderate, ≥13 light.
    #[must_use]
    pub const fn from_score(score: PillarScore) -> Self {
        match score.value() {
            0..=MAJOR_GAP_MAX => Self::Major,
            0..=MODERATE_GAP_MAX => Self::Moderate,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Major => 0,
            Self::Moderate => 1,
            Self::Light => 2,
        }
    }

    /// Recommendation priority (1 = highest)
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Major => 1,
            Self::Moderate => 2,
            Self::Light => 3,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Moderate => "moderate",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative label for a category score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Excellent,
    Strong,
    Developing,
    NeedsFocus,
}

impl Tier {
    pub const ALL: [Self; 4] = [
        Self::Excellent,
        Self::Strong,
        Self::Developing,
        Self::NeedsFocus,
    ];

    /// Tier table: ≥18 excellent, ≥15 strong, ≥11 developing, else needs focus.
    #[must_use]
    pub const fn from_score(score: PillarScore) -> Self {
        let value = score.value();
        if value >= EXCELLENT_MIN {
            Self::Excellent
        } else if value >= STRONG_MIN {
            Self::Strong
        } else if value >= DEVELOPING_MIN {
            Self::Developing
        } else {
            Self::NeedsFocus
        }
    }

    /// The severity the tier table pairs with this tier.
    ///
    /// Differs from [`Severity::from_score`] for scores 9–10 and 13–14.
    #[must_use]
    pub const fn implied_severity(self) -> Severity {
        match self {
            Self::Excellent | Self::Strong => Severity::Light,
            Self::Developing => Severity::Moderate,
            Self::NeedsFocus => Severity::Major,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Excellent => 0,
            Self::Strong => 1,
            Self::Developing => 2,
            Self::NeedsFocus => 3,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Strong => "strong",
            Self::Developing => "developing",
            Self::NeedsFocus => "needs_focus",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Strong => "Strong",
            Self::Developing => "Developing",
            Self::NeedsFocus => "Needs focus",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity and tier of one category score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub severity: Severity,
    pub tier: Tier,
}

/// Classify a canonical category score.
#[must_use]
pub const fn classify(score: PillarScore) -> Classification {
    Classification {
        severity: Severity::from_score(score),
        tier: Tier::from_score(score),
    }
}

/// Band of the weighted 0–100 composite, used to pick the overall narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OverallBand {
    Excellent,
    Strong,
    Developing,
    Opportunity,
}

impl OverallBand {
    /// ≥80 excellent, ≥60 strong, ≥40 developing, otherwise opportunity.
    #[must_use]
    pub const fn from_composite(value: u8) -> Self {
        match value {
            80..=u8::MAX => Self::Excellent,
            60..=79 => Self::Strong,
            40..=59 => Self::Developing,
            _ => Self::Opportunity,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Strong => "strong",
            Self::Developing => "developing",
            Self::Opportunity => "opportunity",
        }
    }
}

impl fmt::Display for OverallBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(value: u8) -> PillarScore {
        PillarScore::clamped(value)
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::from_score(score(20)), Tier::Excellent);
        assert_eq!(Tier::from_score(score(18)), Tier::Excellent);
        assert_eq!(Tier::from_score(score(17)), Tier::Strong);
        assert_eq!(Tier::from_score(score(15)), Tier::Strong);
        assert_eq!(Tier::from_score(score(14)), Tier::Developing);
        assert_eq!(Tier::from_score(score(11)), Tier::Developing);
        assert_eq!(Tier::from_score(score(10)), Tier::NeedsFocus);
        assert_eq!(Tier::from_score(score(1)), Tier::NeedsFocus);
    }

    #[test]
    fn test_severity_boundaries() {
        assert_eq!(Severity::from_score(score(8)), Severity::Major);
        assert_eq!(Severity::from_score(score(9)), Severity::Moderate);
        assert_eq!(Severity::from_score(score(12)), Severity::Moderate);
        assert_eq!(Severity::from_score(score(13)), Severity::Light);
        assert_eq!(Severity::from_score(score(1)), Severity::Major);
        assert_eq!(Severity::from_score(score(20)), Severity::Light);
    }

    #[test]
    fn test_tables_disagree_only_at_documented_scores() {
        let disagreements: Vec<u8> = (PillarScore::MIN..=PillarScore::MAX)
            .filter(|&v| {
                let c = classify(score(v));
                c.tier.implied_severity() != c.severity
            })
            .collect();
        assert_eq!(disagreements, vec![9, 10, 13, 14]);
    }

    #[test]
    fn test_classify_combines_both_tables() {
        assert_eq!(
            classify(score(13)),
            Classification {
                severity: Severity::Light,
                tier: Tier::Developing
            }
        );
        assert_eq!(
            classify(score(5)),
            Classification {
                severity: Severity::Major,
                tier: Tier::NeedsFocus
            }
        );
    }

    #[test]
    fn test_overall_band() {
        assert_eq!(OverallBand::from_composite(100), OverallBand::Excellent);
        assert_eq!(OverallBand::from_composite(80), OverallBand::Excellent);
        assert_eq!(OverallBand::from_composite(79), OverallBand::Strong);
        assert_eq!(OverallBand::from_composite(60), OverallBand::Strong);
        assert_eq!(OverallBand::from_composite(40), OverallBand::Developing);
        assert_eq!(OverallBand::from_composite(39), OverallBand::Opportunity);
        assert_eq!(OverallBand::from_composite(30), OverallBand::Opportunity);
    }

    #[test]
    fn test_severity_priority_order() {
        assert!(Severity::Major < Severity::Moderate);
        assert_eq!(Severity::Major.priority(), 1);
        assert_eq!(Severity::Light.priority(), 3);
    }
}
