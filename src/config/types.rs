//! Configuration types for brand-alignment.

use crate::payload::ProductTier;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Scoring options
    pub scoring: ScoringConfig,
    /// Report assembly options
    pub report: ReportSettings,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the product tier used when a request does not name one.
    pub const fn product_tier(mut self, tier: ProductTier) -> Self {
        self.config.report.product_tier = tier;
        self
    }

    /// Set the brand name used when a request does not supply one.
    pub fn brand_name(mut self, name: impl Into<String>) -> Self {
        self.config.report.brand_name = Some(name.into());
        self
    }

    /// Include or drop the unweighted diagnostic composite.
    pub const fn include_diagnostic_composite(mut self, include: bool) -> Self {
        self.config.scoring.include_diagnostic_composite = include;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Exit with a failure code when the composite falls below `min`.
    pub const fn min_score(mut self, min: Option<u8>) -> Self {
        self.config.behavior.min_score = min;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Scoring options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Report the unweighted 5–25 mean alongside the weighted composite
    pub include_diagnostic_composite: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            include_diagnostic_composite: true,
        }
    }
}

/// Report assembly defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ReportSettings {
    /// Product tier for requests that do not name one
    pub product_tier: ProductTier,
    /// Brand name for requests that do not supply one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit with code 1 when the weighted composite is below this value (0–100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.scoring.include_diagnostic_composite);
        assert_eq!(config.report.product_tier, ProductTier::Baseline);
        assert_eq!(config.output.format, ReportFormat::Auto);
        assert!(config.behavior.min_score.is_none());
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .product_tier(ProductTier::Full)
            .brand_name("Acme")
            .include_diagnostic_composite(false)
            .output_format(ReportFormat::Json)
            .min_score(Some(50))
            .quiet(true)
            .build();
        assert_eq!(config.report.product_tier, ProductTier::Full);
        assert_eq!(config.report.brand_name.as_deref(), Some("Acme"));
        assert!(!config.scoring.include_diagnostic_composite);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.behavior.min_score, Some(50));
        assert!(config.behavior.quiet);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig = serde_yaml_ng::from_str("report:\n  product_tier: extended\n").unwrap();
        assert_eq!(config.report.product_tier, ProductTier::Extended);
        assert!(config.scoring.include_diagnostic_composite);
    }
}
