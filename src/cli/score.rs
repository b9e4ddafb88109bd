//! Score and upsell command handlers.

use crate::config::AppConfig;
use crate::payload::{ProductTier, ReportPayload};
use crate::pipeline::{
    below_min_score, evaluate, exit_codes, load_request, output_report, payload_fingerprint,
};
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Arguments shared by the `score` and `upsell` subcommands.
#[derive(Debug, Clone, Default)]
pub struct ScoreCommand {
    /// Request file, or `-` for stdin
    pub request: PathBuf,
    /// Tier override; beats both the request and the config file
    pub tier: Option<String>,
    /// Print the payload fingerprint to stderr
    pub fingerprint: bool,
}

impl ScoreCommand {
    fn evaluate(&self, config: &AppConfig) -> Result<ReportPayload> {
        let mut request = load_request(&self.request)?;
        if let Some(tier) = &self.tier {
            let Ok(parsed) = ProductTier::parse(tier) else {
                let known: Vec<&str> = ProductTier::ALL.iter().map(|t| t.name()).collect();
                bail!("unknown tier '{tier}' (expected one of: {})", known.join(", "));
            };
            request.product_tier = Some(parsed.name().to_string());
        }
        evaluate(&request, config)
            .with_context(|| format!("failed to evaluate {}", self.request.display()))
    }
}

/// Run the score command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_score(command: &ScoreCommand, config: &AppConfig) -> Result<i32> {
    let payload = command.evaluate(config)?;

    if !config.behavior.quiet {
        tracing::info!(
            "Scored {} at {}/{} ({})",
            payload.brand_name.as_deref().unwrap_or("assessment"),
            payload.composite.value,
            payload.composite.max,
            payload.overall_band
        );
    }

    output_report(config, &payload)?;

    if command.fingerprint {
        eprintln!("fingerprint: {:016x}", payload_fingerprint(&payload)?);
    }

    if below_min_score(&payload, config.behavior.min_score) {
        if !config.behavior.quiet {
            tracing::warn!(
                "Composite {} is below the minimum of {}",
                payload.composite.value,
                config.behavior.min_score.unwrap_or_default()
            );
        }
        return Ok(exit_codes::BELOW_MIN_SCORE);
    }
    Ok(exit_codes::SUCCESS)
}

/// Print only the upsell copy for a request.
///
/// Returns the copy that was printed, or `None` for the Complete tier.
pub fn run_upsell(command: &ScoreCommand, config: &AppConfig) -> Result<Option<String>> {
    let payload = command.evaluate(config)?;
    match payload.upsell {
        Some(upsell) => {
            println!("{}", upsell.text);
            Ok(Some(upsell.text))
        }
        None => {
            if !config.behavior.quiet {
                tracing::info!("The {} tier has no upsell", payload.product_tier);
            }
            Ok(None)
        }
    }
}
