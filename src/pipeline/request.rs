//! Assessment requests and loading them from disk or stdin.

use crate::error::{AlignmentError, ErrorContext, InputErrorKind, Result};
use crate::model::{ContextSignals, RawAssessmentInput};
use crate::payload::TierInputs;
use crate::scoring::ScoreScale;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// One assessment to evaluate.
///
/// Exactly one of `ratings` (25 sub-criterion ratings) or `scores`
/// (five pre-aggregated category scores on `scale`) must be present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct AssessmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratings: Option<RawAssessmentInput>,
    /// Category key to score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<IndexMap<String, f64>>,
    pub scale: ScoreScale,
    pub signals: ContextSignals,
    /// Product tier name; the configured default applies when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_tier: Option<String>,
    pub inputs: TierInputs,
}

impl AssessmentRequest {
    /// Request built from sub-criterion ratings.
    #[must_use]
    pub fn from_ratings(ratings: RawAssessmentInput) -> Self {
        Self {
            ratings: Some(ratings),
            ..Self::default()
        }
    }

    /// Request built from pre-aggregated category scores.
    pub fn from_scores<K: Into<String>>(
        scores: impl IntoIterator<Item = (K, f64)>,
        scale: ScoreScale,
    ) -> Self {
        Self {
            scores: Some(scores.into_iter().map(|(k, v)| (k.into(), v)).collect()),
            scale,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_signals(mut self, signals: ContextSignals) -> Self {
        self.signals = signals;
        self
    }

    #[must_use]
    pub fn with_tier(mut self, tier: impl Into<String>) -> Self {
        self.product_tier = Some(tier.into());
        self
    }

    #[must_use]
    pub fn with_inputs(mut self, inputs: TierInputs) -> Self {
        self.inputs = inputs;
        self
    }
}

/// Parse a request from JSON text.
pub fn parse_request(json: &str) -> Result<AssessmentRequest> {
    serde_json::from_str(json).map_err(|e| {
        AlignmentError::input("assessment request", InputErrorKind::InvalidJson(e.to_string()))
    })
}

/// Load a request from a file, or from stdin when `source` is `-`.
pub fn load_request(source: &Path) -> Result<AssessmentRequest> {
    let content = if source.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source).map_err(|e| AlignmentError::io(source, e))?
    };
    parse_request(&content).with_context(|| source.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Signal;
    use tempfile::TempDir;

    #[test]
    fn test_parse_ratings_request() {
        let request = parse_request(
            r#"{"ratings":{"clarity":4,"testimonials":2},"signals":["no_testimonials"],"product_tier":"free"}"#,
        )
        .unwrap();
        let ratings = request.ratings.unwrap();
        assert_eq!(ratings.get("clarity"), Some(4.0));
        assert!(request.signals.contains(Signal::NoTestimonials));
        assert_eq!(request.product_tier.as_deref(), Some("free"));
        assert_eq!(request.scale, ScoreScale::Auto);
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let err = parse_request(r#"{"ratings":{},"tier":"full"}"#).unwrap_err();
        assert!(matches!(
            err,
            AlignmentError::Input {
                source: InputErrorKind::InvalidJson(_),
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_signal() {
        assert!(parse_request(r#"{"signals":["no_budget"]}"#).is_err());
    }

    #[test]
    fn test_load_request_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("request.json");
        std::fs::write(
            &path,
            r#"{"scores":{"positioning":80,"messaging":60,"visibility":40,"credibility":20,"conversion":100},"scale":"percent"}"#,
        )
        .unwrap();
        let request = load_request(&path).unwrap();
        assert_eq!(request.scale, ScoreScale::Percent);
        assert_eq!(request.scores.unwrap().len(), 5);
    }

    #[test]
    fn test_load_request_missing_file() {
        let err = load_request(Path::new("/nonexistent/request.json")).unwrap_err();
        assert!(matches!(err, AlignmentError::Io { .. }));
    }
}
