//! Markdown report generator.

use super::escape::{escape_markdown_inline, escape_markdown_list, escape_markdown_table, escape_md_opt};
use super::{ReportError, ReportFormat, ReportGenerator};
use crate::analysis::OpportunityOutlook;
use crate::payload::{CompleteSection, ExtendedSection, FullSection, ReportPayload};
use std::fmt::Write;

/// Markdown report generator
#[derive(Debug, Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, payload: &ReportPayload) -> Result<String, ReportError> {
        let mut md = String::new();

        match &payload.brand_name {
            Some(brand) => writeln!(md, "# Brand Alignment Report: {}", escape_markdown_inline(brand))?,
            None => writeln!(md, "# Brand Alignment Report")?,
        }
        writeln!(md)?;
        writeln!(
            md,
            "**Overall score:** {}/{} ({})",
            payload.composite.value, payload.composite.max, payload.overall_band
        )?;
        if let Some(diagnostic) = payload.diagnostic_composite {
            writeln!(
                md,
                "**Diagnostic score:** {}/{}",
                diagnostic.value, diagnostic.max
            )?;
        }
        writeln!(md)?;
        writeln!(md, "{}", payload.narrative)?;
        writeln!(md)?;

        writeln!(md, "## Scores")?;
        writeln!(md)?;
        writeln!(md, "| Category | Score | Tier | Gap |")?;
        writeln!(md, "|----------|-------|------|-----|")?;
        for (category, pillar) in payload.pillars.iter() {
            writeln!(
                md,
                "| {} | {} | {} | {} |",
                category.name(),
                pillar.score,
                pillar.tier.label(),
                pillar.severity
            )?;
        }
        writeln!(md)?;

        writeln!(md, "## Category Insights")?;
        for (category, pillar) in payload.pillars.iter() {
            writeln!(md)?;
            writeln!(md, "### {}", category.name())?;
            writeln!(md)?;
            writeln!(md, "{}", pillar.diagnosis)?;
            writeln!(md)?;
            writeln!(md, "- **Strength:** {}", pillar.strength)?;
            writeln!(md, "- **Opportunity:** {}", pillar.opportunity)?;
            writeln!(md, "- **Action:** {}", pillar.action)?;
        }
        writeln!(md)?;
        writeln!(md, "## Findings")?;
        writeln!(md)?;
        writeln!(
            md,
            "- **Weakest category:** {}",
            payload.findings.weakest_category.name()
        )?;
        if !payload.findings.strong_categories.is_empty() {
            let strong: Vec<&str> = payload
                .findings
                .strong_categories
                .iter()
                .map(|c| c.name())
                .collect();
            writeln!(md, "- **Strong categories:** {}", strong.join(", "))?;
        }
        writeln!(md)?;

        match &payload.findings.outlook {
            OpportunityOutlook::Healthy { message } => {
                writeln!(md, "{message}")?;
                writeln!(md)?;
            }
            OpportunityOutlook::Gaps { .. } => {
                writeln!(md, "## Recommendations")?;
                writeln!(md)?;
                for (i, rec) in payload.recommendations.iter().enumerate() {
                    writeln!(
                        md,
                        "{}. **{}** ({} gap, {}): {}",
                        i + 1,
                        rec.category.name(),
                        rec.severity,
                        rec.score,
                        rec.message
                    )?;
                }
                writeln!(md)?;
            }
        }

        if let Some(extended) = &payload.extended {
            write_extended(&mut md, extended)?;
        }
        if let Some(full) = &payload.full {
            write_full(&mut md, full)?;
        }
        if let Some(complete) = &payload.complete {
            write_complete(&mut md, complete)?;
        }

        if let Some(upsell) = &payload.upsell {
            writeln!(md, "---")?;
            writeln!(md)?;
            writeln!(md, "{}", upsell.text)?;
            writeln!(md)?;
        }

        writeln!(
            md,
            "_Scoring engine {}, {} tier._",
            payload.scoring_engine_version, payload.product_tier
        )?;
        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

fn write_extended(md: &mut String, section: &ExtendedSection) -> std::fmt::Result {
    writeln!(md, "## Context")?;
    writeln!(md)?;
    writeln!(
        md,
        "Context completeness: {}%",
        section.context_completeness
    )?;
    if let Some(audience) = &section.audience {
        writeln!(md)?;
        writeln!(md, "**Audience:** {}", escape_markdown_inline(audience))?;
    }
    if !section.competitors.is_empty() {
        writeln!(md)?;
        writeln!(md, "| Competitor | Differentiator |")?;
        writeln!(md, "|------------|----------------|")?;
        for competitor in &section.competitors {
            writeln!(
                md,
                "| {} | {} |",
                escape_markdown_table(&competitor.name),
                escape_md_opt(competitor.differentiator.as_deref())
            )?;
        }
    }
    writeln!(md)?;

    let visibility = &section.visibility;
    writeln!(md, "### Visibility and AI Discoverability")?;
    writeln!(md)?;
    writeln!(
        md,
        "Visibility {} ({}), answer-engine readiness {}%.",
        visibility.score, visibility.tier.label(), visibility.aeo_readiness
    )?;
    writeln!(md)?;
    for check in &visibility.checks {
        let mark = if check.passed { "x" } else { " " };
        writeln!(md, "- [{mark}] {}", check.check)?;
    }
    writeln!(md)?;
    Ok(())
}

fn write_full(md: &mut String, section: &FullSection) -> std::fmt::Result {
    if let Some(foundation) = &section.brand_foundation {
        writeln!(md, "## Brand Foundation")?;
        writeln!(md)?;
        let fields = [
            ("Mission", &foundation.mission),
            ("Positioning statement", &foundation.positioning_statement),
            ("Persona", &foundation.persona),
            ("Archetype", &foundation.archetype),
            ("Visual direction", &foundation.visual_direction),
        ];
        for (label, value) in fields {
            if let Some(value) = value {
                writeln!(md, "- **{label}:** {}", escape_markdown_list(value))?;
            }
        }
        if !foundation.palette.is_empty() {
            let palette: Vec<String> = foundation
                .palette
                .iter()
                .map(|c| escape_markdown_list(c))
                .collect();
            writeln!(md, "- **Palette:** {}", palette.join(", "))?;
        }
        writeln!(md)?;
    }

    writeln!(md, "## Action Plan")?;
    writeln!(md)?;
    for item in &section.action_plan {
        writeln!(
            md,
            "{}. **{}** ({}): {}",
            item.rank,
            item.category.name(),
            item.severity,
            item.action
        )?;
    }
    writeln!(md)?;
    Ok(())
}

fn write_complete(md: &mut String, section: &CompleteSection) -> std::fmt::Result {
    writeln!(md, "## 90-Day Roadmap")?;
    for phase in &section.roadmap_90_day {
        writeln!(md)?;
        writeln!(md, "### Days {}-{}", phase.start_day, phase.end_day)?;
        writeln!(md)?;
        for (category, action) in phase.focus.iter().zip(&phase.actions) {
            writeln!(md, "- **{}:** {}", category.name(), action)?;
        }
    }
    writeln!(md)?;

    writeln!(md, "## 12-Month Roadmap")?;
    writeln!(md)?;
    writeln!(md, "| Quarter | Focus | Objective |")?;
    writeln!(md, "|---------|-------|-----------|")?;
    for quarter in &section.roadmap_12_month {
        let focus: Vec<&str> = quarter.focus.iter().map(|c| c.name()).collect();
        writeln!(
            md,
            "| Q{} | {} | {} |",
            quarter.quarter,
            focus.join(", "),
            quarter.objectives.join("; ")
        )?;
    }
    writeln!(md)?;

    if let Some(map) = &section.competitive_map {
        writeln!(md, "## Competitive Map")?;
        writeln!(md)?;
        writeln!(
            md,
            "{} sits at {} {}/20, {} {}/20.",
            escape_markdown_inline(&map.brand.name),
            map.x_axis.key(),
            map.brand.x,
            map.y_axis.key(),
            map.brand.y
        )?;
        writeln!(md)?;
        writeln!(
            md,
            "| Brand | {} | {} |",
            map.x_axis.name(),
            map.y_axis.name()
        )?;
        writeln!(md, "|-------|------|------|")?;
        for point in std::iter::once(&map.brand).chain(&map.competitors) {
            writeln!(
                md,
                "| {} | {} | {} |",
                escape_markdown_table(&point.name),
                point.x,
                point.y
            )?;
        }
        writeln!(md)?;
        if !map.unplaced.is_empty() {
            let names: Vec<String> = map
                .unplaced
                .iter()
                .map(|n| escape_markdown_inline(n))
                .collect();
            writeln!(md, "Not placed (no estimates): {}", names.join(", "))?;
            writeln!(md)?;
        }
    }

    writeln!(md, "## Prompt Packs")?;
    for (category, prompts) in section.prompt_packs.iter() {
        writeln!(md)?;
        writeln!(md, "### {}", category.name())?;
        writeln!(md)?;
        for prompt in prompts {
            writeln!(md, "- {}", escape_markdown_list(prompt))?;
        }
    }
    writeln!(md)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::model::RawAssessmentInput;
    use crate::payload::{Competitor, ProductTier, TierInputs};
    use crate::pipeline::{evaluate, AssessmentRequest};

    fn payload(tier: ProductTier, inputs: TierInputs) -> ReportPayload {
        let mut request = AssessmentRequest::from_ratings(RawAssessmentInput::uniform(2.0));
        request.product_tier = Some(tier.name().to_string());
        request.inputs = inputs;
        evaluate(&request, &AppConfig::default()).unwrap()
    }

    #[test]
    fn test_baseline_markdown_sections() {
        let md = MarkdownReporter::new()
            .generate(&payload(ProductTier::Baseline, TierInputs::default()))
            .unwrap();
        assert!(md.starts_with("# Brand Alignment Report\n"));
        assert!(md.contains("| Positioning |"));
        assert!(md.contains("## Recommendations"));
        assert!(!md.contains("## Action Plan"));
        assert!(md.contains("---"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let inputs = TierInputs {
            brand_name: Some("Acme *Best*".into()),
            competitors: vec![Competitor::new("Evil | Co").with_differentiator("[x](y)")],
            ..TierInputs::default()
        };
        let md = MarkdownReporter::new()
            .generate(&payload(ProductTier::Complete, inputs))
            .unwrap();
        assert!(md.starts_with("# Brand Alignment Report: Acme \\*Best\\*"));
        assert!(md.contains("| Evil \\| Co | \\[x\\](y) |"));
        assert!(md.contains("## Prompt Packs"));
        assert!(!md.contains("---\n"));
    }

    #[test]
    fn test_competitive_map_table() {
        let inputs = TierInputs {
            brand_name: Some("Acme".into()),
            competitors: vec![
                Competitor::new("Globex").with_scores(15.0, 70.0),
                Competitor::new("Initech"),
            ],
            ..TierInputs::default()
        };
        let md = MarkdownReporter::new()
            .generate(&payload(ProductTier::Complete, inputs))
            .unwrap();
        assert!(md.contains("## Competitive Map"));
        assert!(md.contains("| Brand | Positioning | Credibility |"));
        assert!(md.contains("| Acme | 8 | 8 |"), "{md}");
        assert!(md.contains("| Globex | 15 | 14 |"), "{md}");
        assert!(md.contains("Not placed (no estimates): Initech"));
        assert!(md.contains("## Category Insights"));
    }
}
