//! Configuration module for brand-alignment.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use brand_alignment::config::AppConfig;
//! use brand_alignment::payload::ProductTier;
//!
//! let config = AppConfig::builder()
//!     .product_tier(ProductTier::Full)
//!     .min_score(Some(60))
//!     .build();
//! assert_eq!(config.report.product_tier, ProductTier::Full);
//! ```
//!
//! # Configuration File
//!
//! Place a `.brand-alignment.yaml` file in the working directory or
//! `~/.config/brand-alignment/`:
//!
//! ```yaml
//! report:
//!   product_tier: extended
//!   brand_name: Acme Bakery
//! behavior:
//!   min_score: 60
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, OutputConfig, ReportSettings, ScoringConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and autocomplete `.brand-alignment.yaml`.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
        .map_err(|e| crate::error::AlignmentError::config(format!("schema serialization: {e}")))
}
