//! Report rendering for finished payloads.
//!
//! This module lays out a [`ReportPayload`] in one of several formats:
//! - JSON: Structured data for programmatic integration
//! - Summary: Compact shell-friendly output
//! - Markdown: Human-readable documentation
//!
//! Renderers only arrange fields that are already on the payload. They
//! never score, classify or select copy.
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! All user-supplied text (brand name, audience, competitors, foundation
//! fields) is escaped before it is embedded in Markdown.

pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::ReportFormat;

use crate::payload::ReportPayload;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a finished payload
    fn generate(&self, payload: &ReportPayload) -> Result<String, ReportError>;

    /// Write the rendered report to a writer
    fn write_report(
        &self,
        payload: &ReportPayload,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate(payload)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control.
///
/// `Auto` should be resolved by the caller; if it reaches here it renders
/// as a summary.
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_formats() {
        assert_eq!(create_reporter(ReportFormat::Json).format(), ReportFormat::Json);
        assert_eq!(
            create_reporter(ReportFormat::Markdown).format(),
            ReportFormat::Markdown
        );
        assert_eq!(
            create_reporter_with_options(ReportFormat::Auto, false).format(),
            ReportFormat::Summary
        );
    }
}
