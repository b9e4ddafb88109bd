//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::payload::ReportPayload;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Wrap the payload in a metadata envelope
    include_metadata: bool,
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_metadata: true,
            pretty: true,
        }
    }

    /// Emit the bare payload without the metadata envelope.
    ///
    /// The bare form is byte-identical for identical requests.
    #[must_use]
    pub const fn without_metadata(mut self) -> Self {
        self.include_metadata = false;
        self
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn to_string<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, payload: &ReportPayload) -> Result<String, ReportError> {
        if !self.include_metadata {
            return self.to_string(payload);
        }

        let report = JsonReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME"),
                    version: env!("CARGO_PKG_VERSION"),
                },
                generated_at: Utc::now().to_rfc3339(),
            },
            report: payload,
        };
        self.to_string(&report)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: JsonReportMetadata,
    report: &'a ReportPayload,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawAssessmentInput;
    use crate::pipeline::{evaluate, AssessmentRequest};

    fn payload() -> ReportPayload {
        let request = AssessmentRequest::from_ratings(RawAssessmentInput::uniform(3.0));
        evaluate(&request, &crate::config::AppConfig::default()).unwrap()
    }

    #[test]
    fn test_envelope_contains_metadata() {
        let json = JsonReporter::new().generate(&payload()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["metadata"]["tool"]["name"], "brand-alignment");
        assert!(value["metadata"]["generated_at"].is_string());
        assert_eq!(value["report"]["composite"]["value"], 60);
    }

    #[test]
    fn test_bare_payload_is_stable() {
        let reporter = JsonReporter::new().without_metadata().pretty(false);
        let first = reporter.generate(&payload()).unwrap();
        let second = reporter.generate(&payload()).unwrap();
        assert_eq!(first, second);
        assert!(!first.contains('\n'));
        assert!(first.starts_with("{\"product_tier\":\"baseline\""));
    }
}
