//! Evaluation stage: request in, payload out.
//!
//! Runs normalize → score → classify → insights → analysis → assemble. Every
//! step is a pure function, so evaluation is safe to run from any number of
//! threads at once.

use super::request::AssessmentRequest;
use crate::analysis::analyze;
use crate::config::AppConfig;
use crate::error::{AlignmentError, ErrorContext, InputErrorKind, Result};
use crate::insights::InsightBundle;
use crate::payload::{assemble, ProductTier, ReportPayload, TierInputs};
use crate::scoring::{normalize_raw_scores, normalize_scores, ScoreCard, ScoreScale};
use rayon::prelude::*;
use std::borrow::Cow;
use xxhash_rust::xxh3::xxh3_64;

/// Score a request without assembling a payload.
pub fn score_request(request: &AssessmentRequest) -> Result<ScoreCard> {
    match (&request.ratings, &request.scores) {
        (Some(ratings), None) => ScoreCard::from_ratings(ratings).context("ratings"),
        (None, Some(scores)) => {
            let pairs = scores.iter().map(|(k, v)| (k.as_str(), *v));
            if request.scale == ScoreScale::Raw {
                let raw = normalize_raw_scores(pairs).context("scores")?;
                return Ok(ScoreCard::from_raw(&raw));
            }
            let canonical = normalize_scores(pairs, request.scale).context("scores")?;
            Ok(ScoreCard::from_canonical(&canonical))
        }
        (None, None) => Err(AlignmentError::input(
            "assessment request",
            InputErrorKind::MissingScores,
        )),
        (Some(_), Some(_)) => Err(AlignmentError::input(
            "assessment request",
            InputErrorKind::AmbiguousScores,
        )),
    }
}

/// Product tier for a request, falling back to the configured default.
pub fn resolve_tier(request: &AssessmentRequest, config: &AppConfig) -> Result<ProductTier> {
    request
        .product_tier
        .as_deref()
        .map_or(Ok(config.report.product_tier), ProductTier::parse)
}

/// Evaluate one request into a finished payload.
pub fn evaluate(request: &AssessmentRequest, config: &AppConfig) -> Result<ReportPayload> {
    let tier = resolve_tier(request, config)?;
    request.inputs.check_competitor_scores().context("inputs")?;
    let mut card = score_request(request)?;
    if !config.scoring.include_diagnostic_composite {
        card.diagnostic_composite = None;
    }

    let inputs: Cow<'_, TierInputs> = match (request.inputs.brand(), &config.report.brand_name) {
        (None, Some(brand)) => Cow::Owned(TierInputs {
            brand_name: Some(brand.clone()),
            ..request.inputs.clone()
        }),
        _ => Cow::Borrowed(&request.inputs),
    };

    let bundle = InsightBundle::generate(&card, &request.signals);
    let findings = analyze(&card.scores());
    tracing::debug!(
        tier = %tier,
        weakest = %findings.weakest_category,
        signals = request.signals.len(),
        "evaluated assessment"
    );

    Ok(assemble(
        tier,
        &card,
        &bundle,
        &findings,
        Some(inputs.as_ref()),
        &request.signals,
    ))
}

/// Evaluate many requests in parallel. Results keep the input order.
pub fn evaluate_batch(
    requests: &[AssessmentRequest],
    config: &AppConfig,
) -> Vec<Result<ReportPayload>> {
    requests
        .par_iter()
        .map(|request| evaluate(request, config))
        .collect()
}

/// Stable fingerprint of a payload: xxh3 over its compact JSON encoding.
pub fn payload_fingerprint(payload: &ReportPayload) -> Result<u64> {
    let bytes = serde_json::to_vec(payload).map_err(|e| {
        AlignmentError::report(
            "payload fingerprint",
            crate::error::ReportErrorKind::JsonSerializationError(e.to_string()),
        )
    })?;
    Ok(xxh3_64(&bytes))
}

/// True when a minimum is set and the weighted composite falls below it.
#[must_use]
pub fn below_min_score(payload: &ReportPayload, min_score: Option<u8>) -> bool {
    min_score.is_some_and(|min| payload.composite.value < min)
}
