//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::escape::sanitize_terminal;
use super::{ReportError, ReportFormat, ReportGenerator};
use crate::analysis::OpportunityOutlook;
use crate::payload::ReportPayload;
use crate::scoring::{OverallBand, Severity};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Major => "red",
        Severity::Moderate => "yellow",
        Severity::Light => "green",
    }
}

const fn band_color(band: OverallBand) -> &'static str {
    match band {
        OverallBand::Excellent | OverallBand::Strong => "green",
        OverallBand::Developing => "yellow",
        OverallBand::Opportunity => "red",
    }
}

/// Number of recommendations listed in the summary
const TOP_RECOMMENDATIONS: usize = 3;

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, payload: &ReportPayload) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        // Header
        lines.push(self.color("Brand Alignment Summary", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        if let Some(brand) = &payload.brand_name {
            lines.push(format!(
                "{}  {}",
                self.color("Brand:", "cyan"),
                sanitize_terminal(brand)
            ));
        }
        lines.push(format!(
            "{}  {}",
            self.color("Tier:", "cyan"),
            payload.product_tier
        ));

        let mut overall = format!(
            "{}  {}/{} {}",
            self.color("Overall:", "cyan"),
            payload.composite.value,
            payload.composite.max,
            self.color(&format!("({})", payload.overall_band), band_color(payload.overall_band)),
        );
        if let Some(diagnostic) = payload.diagnostic_composite {
            overall.push_str(&format!(
                "  {}",
                self.color(
                    &format!("diagnostic {}/{}", diagnostic.value, diagnostic.max),
                    "dim"
                )
            ));
        }
        lines.push(overall);
        lines.push(String::new());
        lines.push(payload.narrative.clone());
        lines.push(String::new());

        // Categories
        lines.push(self.color("Categories:", "bold"));
        for (category, pillar) in payload.pillars.iter() {
            lines.push(format!(
                "  {:<12} {:>5}  {:<12} {}",
                category.name(),
                pillar.score.to_string(),
                pillar.tier.label(),
                self.color(pillar.severity.label(), severity_color(pillar.severity)),
            ));
        }
        lines.push(String::new());

        // Findings
        lines.push(format!(
            "{}  {}",
            self.color("Weakest:", "cyan"),
            payload.findings.weakest_category.key()
        ));
        if !payload.findings.strong_categories.is_empty() {
            let strong: Vec<&str> = payload
                .findings
                .strong_categories
                .iter()
                .map(|c| c.key())
                .collect();
            lines.push(format!(
                "{}  {}",
                self.color("Strong:", "cyan"),
                strong.join(", ")
            ));
        }

        match &payload.findings.outlook {
            OpportunityOutlook::Healthy { message } => {
                lines.push(String::new());
                lines.push(self.color(message, "green"));
            }
            OpportunityOutlook::Gaps { .. } => {
                lines.push(String::new());
                lines.push(self.color("Top recommendations:", "bold"));
                for rec in payload.recommendations.iter().take(TOP_RECOMMENDATIONS) {
                    lines.push(format!(
                        "  {}. {} {}",
                        rec.priority,
                        self.color(&format!("[{}]", rec.category.key()), severity_color(rec.severity)),
                        rec.message
                    ));
                }
                let remaining = payload
                    .recommendations
                    .len()
                    .saturating_sub(TOP_RECOMMENDATIONS);
                if remaining > 0 {
                    lines.push(self.color(&format!("  ... and {remaining} more"), "dim"));
                }
            }
        }

        if let Some(upsell) = &payload.upsell {
            lines.push(String::new());
            lines.push(self.color("Next step:", "bold"));
            lines.push(upsell.text.clone());
        }

        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::model::RawAssessmentInput;
    use crate::pipeline::{evaluate, AssessmentRequest};

    fn render(rating: f64, colored: bool) -> String {
        let request = AssessmentRequest::from_ratings(RawAssessmentInput::uniform(rating));
        let payload = evaluate(&request, &AppConfig::default()).unwrap();
        let reporter = if colored {
            SummaryReporter::new()
        } else {
            SummaryReporter::new().no_color()
        };
        reporter.generate(&payload).unwrap()
    }

    #[test]
    fn test_summary_lists_every_category() {
        let text = render(1.0, false);
        for name in ["Positioning", "Messaging", "Visibility", "Credibility", "Conversion"] {
            assert!(text.contains(name), "{name}");
        }
        assert!(text.contains("Overall:  20/100"));
        assert!(text.contains("Top recommendations:"));
        assert!(text.contains("... and 2 more"));
    }

    #[test]
    fn test_summary_healthy() {
        let text = render(5.0, false);
        assert!(text.contains("All five categories are in good shape"));
        assert!(!text.contains("Top recommendations"));
    }

    #[test]
    fn test_brand_control_characters_are_stripped() {
        let mut request = AssessmentRequest::from_ratings(RawAssessmentInput::uniform(3.0));
        request.inputs.brand_name = Some("Acme\x1b[2J\x1b[31m\nCo".into());
        let payload = evaluate(&request, &AppConfig::default()).unwrap();
        let text = SummaryReporter::new().no_color().generate(&payload).unwrap();
        assert!(!text.contains('\x1b'));
        assert!(text.contains("Brand:  Acme[2J[31m Co"), "{text}");
    }

    #[test]
    fn test_no_color_has_no_escapes() {
        assert!(!render(3.0, false).contains('\x1b'));
        assert!(render(3.0, true).contains("\x1b[1m"));
    }
}
