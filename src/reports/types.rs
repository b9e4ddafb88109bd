//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: summary on a TTY, JSON otherwise
    #[default]
    Auto,
    /// Structured JSON payload
    Json,
    /// Compact terminal summary
    Summary,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
}

impl ReportFormat {
    /// File extension conventionally used for this format
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Auto | Self::Summary => "txt",
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names_match_display() {
        for format in [
            ReportFormat::Auto,
            ReportFormat::Json,
            ReportFormat::Summary,
            ReportFormat::Markdown,
        ] {
            let json = serde_json::to_string(&format).unwrap();
            assert_eq!(json, format!("\"{format}\""));
        }
    }

    #[test]
    fn test_value_enum_alias() {
        assert_eq!(
            ReportFormat::from_str("md", true).unwrap(),
            ReportFormat::Markdown
        );
    }
}
