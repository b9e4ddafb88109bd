//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::payload::ProductTier;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".brand-alignment.yaml",
    ".brand-alignment.yml",
    "brand-alignment.yaml",
    "brand-alignment.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided (the only candidate when given)
/// 2. Current directory
/// 3. User config directory (~/.config/brand-alignment/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then(|| path.to_path_buf());
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("brand-alignment")) {
            return Some(path);
        }
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    serde_yaml_ng::from_str(&content).map_err(|source| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the config file in effect, or defaults when none is found.
///
/// An explicit path must exist and parse. A discovered file must parse; a
/// broken file is never replaced by defaults.
pub fn load_or_default(
    explicit_path: Option<&Path>,
) -> Result<(AppConfig, Option<PathBuf>), ConfigFileError> {
    let path = explicit_path.map_or_else(|| discover_config_file(None), |p| Some(p.to_path_buf()));
    match path {
        Some(path) => {
            let config = load_config_file(&path)?;
            tracing::debug!("Loaded config from {}", path.display());
            Ok((config, Some(path)))
        }
        None => Ok((AppConfig::default(), None)),
    }
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override, which is how CLI
    /// flags are layered over file config.
    pub fn merge(&mut self, other: &Self) {
        if !other.scoring.include_diagnostic_composite {
            self.scoring.include_diagnostic_composite = false;
        }

        if other.report.product_tier != ProductTier::default() {
            self.report.product_tier = other.report.product_tier;
        }
        if other.report.brand_name.is_some() {
            self.report.brand_name.clone_from(&other.report.brand_name);
        }

        if other.output.format != ReportFormat::Auto {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
        if other.behavior.min_score.is_some() {
            self.behavior.min_score = other.behavior.min_score;
        }
    }

    /// Load from file and merge with CLI overrides.
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> Result<(Self, Option<PathBuf>), ConfigFileError> {
        let (mut config, loaded_from) = load_or_default(config_path)?;
        config.merge(cli_overrides);
        Ok((config, loaded_from))
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config file.
#[must_use]
pub fn generate_example_config() -> String {
    r"# Brand Alignment Configuration
# ==============================
#
# Place this file at:
#   - .brand-alignment.yaml in the working directory
#   - ~/.config/brand-alignment/brand-alignment.yaml for global config
#
# CLI arguments always override file settings.

# Scoring options
scoring:
  # Report the unweighted 5-25 mean alongside the weighted 0-100 composite
  include_diagnostic_composite: true

# Report assembly
report:
  # Tier for requests that do not name one: baseline, extended, full, complete
  product_tier: baseline
  # Brand name for requests that do not supply one
  # brand_name: Acme Bakery

# Output configuration
output:
  # Format: auto, json, summary, markdown
  format: auto
  # Output file path (omit for stdout)
  # file: report.json
  # Disable colored output
  no_color: false

# Behavior flags
behavior:
  # Suppress non-essential output
  quiet: false
  # Exit with code 1 when the weighted composite is below this value
  # min_score: 60
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".brand-alignment.yaml");
        std::fs::write(&config_path, "report:\n  product_tier: full\n").unwrap();

        assert_eq!(find_config_in_dir(tmp.path()), Some(config_path));
    }

    #[test]
    fn test_find_config_prefers_dotfile() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("brand-alignment.yml"), "").unwrap();
        let dotfile = tmp.path().join(".brand-alignment.yml");
        std::fs::write(&dotfile, "").unwrap();

        assert_eq!(find_config_in_dir(tmp.path()), Some(dotfile));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r#"
scoring:
  include_diagnostic_composite: false
report:
  product_tier: free
  brand_name: Acme
behavior:
  min_score: 55
"#;
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert!(!config.scoring.include_diagnostic_composite);
        assert_eq!(config.report.product_tier, ProductTier::Baseline);
        assert_eq!(config.report.brand_name.as_deref(), Some("Acme"));
        assert_eq!(config.behavior.min_score, Some(55));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("bad.yaml");
        std::fs::write(&config_path, "report:\n  product_tier: platinum\n").unwrap();

        let err = load_config_file(&config_path).unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse { .. }));
        assert!(err.to_string().contains("bad.yaml"), "{err}");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.yaml");
        let result = load_or_default(Some(missing.as_path()));
        assert!(matches!(result, Err(ConfigFileError::NotFound(ref p)) if *p == missing));
    }

    #[test]
    fn test_explicit_path_with_bad_value_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("cfg.yaml");
        std::fs::write(&config_path, "behavior:\n  min_score: ninety\n").unwrap();

        let result = AppConfig::from_file_with_overrides(Some(config_path.as_path()), &AppConfig::default());
        assert!(matches!(result, Err(ConfigFileError::Parse { .. })));
    }

    #[test]
    fn test_explicit_path_loads() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("cfg.yaml");
        std::fs::write(&config_path, "behavior:\n  min_score: 90\n").unwrap();

        let (config, loaded_from) = load_or_default(Some(config_path.as_path())).unwrap();
        assert_eq!(config.behavior.min_score, Some(90));
        assert_eq!(loaded_from, Some(config_path));
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::builder()
            .brand_name("From File")
            .product_tier(ProductTier::Extended)
            .build();
        let overrides = AppConfig::builder()
            .product_tier(ProductTier::Complete)
            .output_format(ReportFormat::Markdown)
            .min_score(Some(40))
            .build();

        base.merge(&overrides);

        assert_eq!(base.report.product_tier, ProductTier::Complete);
        assert_eq!(base.report.brand_name.as_deref(), Some("From File"));
        assert_eq!(base.output.format, ReportFormat::Markdown);
        assert_eq!(base.behavior.min_score, Some(40));
    }

    #[test]
    fn test_example_config_parses() {
        let example = generate_example_config();
        assert!(example.contains("product_tier"));
        let config: AppConfig = serde_yaml_ng::from_str(&example).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "output:\n  no_color: true").unwrap();

        assert_eq!(discover_config_file(Some(config_path.as_path())), Some(config_path));
    }
}
