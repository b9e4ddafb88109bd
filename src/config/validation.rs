//! Configuration validation for brand-alignment.

use super::types::{AppConfig, BehaviorConfig, OutputConfig, ReportSettings, ScoringConfig};
use crate::scoring::CompositeScore;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.scoring.validate());
        errors.extend(self.report.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}

impl Validatable for ReportSettings {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(ref name) = self.brand_name {
            if name.trim().is_empty() {
                errors.push(ConfigError::new(
                    "report.brand_name",
                    "Brand name must not be blank; omit the field instead",
                ));
            }
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(min) = self.min_score {
            if min > CompositeScore::WEIGHTED_MAX {
                errors.push(ConfigError::new(
                    "behavior.min_score",
                    format!(
                        "Minimum score must be between 0 and {}, got {min}",
                        CompositeScore::WEIGHTED_MAX
                    ),
                ));
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_min_score_range() {
        let config = AppConfig::builder().min_score(Some(101)).build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "behavior.min_score");

        assert!(AppConfig::builder().min_score(Some(100)).build().is_valid());
    }

    #[test]
    fn test_blank_brand_name() {
        let config = AppConfig::builder().brand_name("  ").build();
        assert_eq!(config.validate()[0].field, "report.brand_name");
    }

    #[test]
    fn test_output_parent_must_exist() {
        let config = AppConfig::builder()
            .output_file(Some(PathBuf::from("/nonexistent/dir/report.json")))
            .build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().starts_with("output.file:"));
    }
}
