//! Axum route handlers for the Sentiment API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::sentiment::lexicon::{NEGATIVE_MARKERS, POSITIVE_MARKERS};
use crate::sentiment::scorer::{MatchPolicy, Sentiment};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub sentiment: Sentiment,
    pub confidence: f64,
    /// Confidence rounded to a whole percent for display.
    pub confidence_pct: u32,
    pub positive_matches: u32,
    pub negative_matches: u32,
    pub match_policy: MatchPolicy,
}

#[derive(Debug, Serialize)]
pub struct LexiconResponse {
    pub positive: &'static [&'static str],
    pub negative: &'static [&'static str],
}

/// POST /api/v1/sentiment/analyze
///
/// Blank feedback is rejected rather than scored as neutral. Malformed bodies
/// are reported through the standard error envelope.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(req) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    if req.text.trim().is_empty() {
        return Err(AppError::Validation("text must not be blank".to_string()));
    }

    let limit = state.config.max_feedback_chars;
    let chars = req.text.chars().count();
    if chars > limit {
        return Err(AppError::UnprocessableEntity(format!(
            "text is {chars} characters; the limit is {limit}"
        )));
    }

    let tally = state.sentiment.tally(&req.text);
    let result = tally.result();

    debug!(
        chars,
        positive = tally.positive,
        negative = tally.negative,
        sentiment = ?result.sentiment,
        "Scored feedback"
    );

    Ok(Json(AnalyzeResponse {
        sentiment: result.sentiment,
        confidence: result.confidence,
        confidence_pct: result.confidence.round() as u32,
        positive_matches: tally.positive,
        negative_matches: tally.negative,
        match_policy: state.sentiment.policy(),
    }))
}

/// GET /api/v1/sentiment/lexicon
pub async fn handle_lexicon() -> Json<LexiconResponse> {
    Json(LexiconResponse {
        positive: POSITIVE_MARKERS,
        negative: NEGATIVE_MARKERS,
    })
}
