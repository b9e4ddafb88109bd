//! Free-text context supplied for paid tiers.

use crate::error::{AlignmentError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A competitor named by the respondent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Competitor {
    pub name: String,
    /// What the respondent believes sets this competitor apart
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub differentiator: Option<String>,
    /// Estimated positioning score, 1–20 or 0–100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positioning: Option<f64>,
    /// Estimated credibility score, 1–20 or 0–100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credibility: Option<f64>,
}

impl Competitor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            differentiator: None,
            positioning: None,
            credibility: None,
        }
    }

    #[must_use]
    pub fn with_differentiator(mut self, differentiator: impl Into<String>) -> Self {
        self.differentiator = Some(differentiator.into());
        self
    }

    /// Set the positioning and credibility estimates used on the competitive map.
    #[must_use]
    pub fn with_scores(mut self, positioning: f64, credibility: f64) -> Self {
        self.positioning = Some(positioning);
        self.credibility = Some(credibility);
        self
    }

    fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Optional context used by the extended, full and complete tiers.
///
/// Every field may be absent; the matching payload field or section is then
/// omitted. Blank strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TierInputs {
    pub brand_name: Option<String>,
    pub audience: Option<String>,
    pub competitors: Vec<Competitor>,
    pub mission: Option<String>,
    pub positioning_statement: Option<String>,
    pub persona: Option<String>,
    pub archetype: Option<String>,
    pub visual_direction: Option<String>,
    /// Brand colours, free text or hex codes
    pub palette: Vec<String>,
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

impl TierInputs {
    /// Presence of each context field, in a fixed order.
    #[must_use]
    pub fn context_fields(&self) -> [(&'static str, bool); 9] {
        [
            ("brand_name", present(&self.brand_name)),
            ("audience", present(&self.audience)),
            ("competitors", self.competitors.iter().any(Competitor::is_named)),
            ("mission", present(&self.mission)),
            ("positioning_statement", present(&self.positioning_statement)),
            ("persona", present(&self.persona)),
            ("archetype", present(&self.archetype)),
            ("visual_direction", present(&self.visual_direction)),
            ("palette", self.palette.iter().any(|c| !c.trim().is_empty())),
        ]
    }

    /// Share of context fields supplied, 0–100, rounded half up.
    #[must_use]
    pub fn completeness_percent(&self) -> u8 {
        let fields = self.context_fields();
        let filled = fields.iter().filter(|(_, p)| *p).count();
        // at most 9 fields, so this cannot overflow u8
        ((filled * 200 + fields.len()) / (fields.len() * 2)) as u8
    }

    /// Names of context fields not supplied
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.context_fields()
            .into_iter()
            .filter(|(_, p)| !p)
            .map(|(name, _)| name)
            .collect()
    }

    /// Brand name, trimmed, when supplied
    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        self.brand_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// True when any brand-foundation field is supplied.
    #[must_use]
    pub fn has_foundation(&self) -> bool {
        present(&self.mission)
            || present(&self.positioning_statement)
            || present(&self.persona)
            || present(&self.archetype)
            || present(&self.visual_direction)
            || !self.palette_entries().is_empty()
    }

    /// Competitors with a non-blank name, in the order given
    #[must_use]
    pub fn named_competitors(&self) -> Vec<Competitor> {
        self.competitors
            .iter()
            .filter(|c| c.is_named())
            .cloned()
            .collect()
    }

    /// Palette entries, trimmed, blanks dropped
    #[must_use]
    pub fn palette_entries(&self) -> Vec<String> {
        self.palette
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Reject competitor score estimates that are not finite numbers.
    pub fn check_competitor_scores(&self) -> Result<()> {
        for competitor in &self.competitors {
            for (axis, value) in [
                ("positioning", competitor.positioning),
                ("credibility", competitor.credibility),
            ] {
                if let Some(value) = value.filter(|v| !v.is_finite()) {
                    return Err(AlignmentError::validation(format!(
                        "competitor '{}' has a non-finite {axis} score ({value})",
                        competitor.name
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Trimmed copy of an optional field, None when blank.
pub(crate) fn cleaned(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_are_zero_percent() {
        let inputs = TierInputs::default();
        assert_eq!(inputs.completeness_percent(), 0);
        assert_eq!(inputs.missing_fields().len(), 9);
        assert!(!inputs.has_foundation());
    }

    #[test]
    fn test_completeness_rounds() {
        let inputs = TierInputs {
            brand_name: Some("Acme".into()),
            audience: Some("Independent bakeries".into()),
            competitors: vec![Competitor::new("Globex")],
            ..TierInputs::default()
        };
        // 3 of 9 = 33.3%
        assert_eq!(inputs.completeness_percent(), 33);

        let inputs = TierInputs {
            mission: Some("m".into()),
            persona: Some("p".into()),
            archetype: Some("a".into()),
            visual_direction: Some("v".into()),
            palette: vec!["#112233".into()],
            ..inputs
        };
        // 8 of 9 = 88.9%
        assert_eq!(inputs.completeness_percent(), 89);
        assert_eq!(inputs.missing_fields(), vec!["positioning_statement"]);
    }

    #[test]
    fn test_blank_strings_count_as_absent() {
        let inputs = TierInputs {
            brand_name: Some("   ".into()),
            mission: Some(String::new()),
            ..TierInputs::default()
        };
        assert_eq!(inputs.brand(), None);
        assert!(!inputs.has_foundation());
        assert_eq!(cleaned(&inputs.mission), None);
    }

    #[test]
    fn test_blank_list_entries_count_as_absent() {
        let inputs = TierInputs {
            competitors: vec![Competitor::new("  "), Competitor::new("")],
            palette: vec![" ".into(), String::new()],
            ..TierInputs::default()
        };
        assert_eq!(inputs.completeness_percent(), 0);
        assert!(inputs.missing_fields().contains(&"competitors"));
        assert!(inputs.missing_fields().contains(&"palette"));
        assert!(!inputs.has_foundation());
        assert!(inputs.named_competitors().is_empty());

        let inputs = TierInputs {
            competitors: vec![Competitor::new(" "), Competitor::new("Globex")],
            palette: vec![" #112233 ".into(), "".into()],
            ..TierInputs::default()
        };
        assert_eq!(inputs.named_competitors().len(), 1);
        assert_eq!(inputs.palette_entries(), vec!["#112233".to_string()]);
        assert!(inputs.has_foundation());
    }

    #[test]
    fn test_non_finite_competitor_score_rejected() {
        let inputs = TierInputs {
            competitors: vec![Competitor::new("Globex").with_scores(12.0, f64::NAN)],
            ..TierInputs::default()
        };
        let err = inputs.check_competitor_scores().unwrap_err();
        assert!(err.to_string().contains("credibility"), "{err}");
        assert!(TierInputs::default().check_competitor_scores().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let inputs: TierInputs = serde_json::from_str(
            r#"{"brand_name":"Acme","competitors":[{"name":"Globex","differentiator":"price"}]}"#,
        )
        .unwrap();
        assert_eq!(inputs.brand(), Some("Acme"));
        assert_eq!(
            inputs.competitors[0].differentiator.as_deref(),
            Some("price")
        );
        assert!(inputs.competitors[0].positioning.is_none());
        assert!(inputs.palette.is_empty());
    }
}
