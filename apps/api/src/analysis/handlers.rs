//! Axum route handlers for the analysis API.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::validation::{validate_document, validate_score_text};
use crate::analysis::{run_blocking, ClassificationResult, ScoreReport};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectRequest {
    pub document_content: String,
    pub document_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectResponse {
    pub detection_id: Uuid,
    pub document_name: String,
    pub result: ClassificationResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/score
///
/// Scores resume text for ATS compatibility across four categories.
pub async fn handle_ats_score(
    State(state): State<AppState>,
    AppJson(request): AppJson<ScoreRequest>,
) -> Result<Json<ScoreReport>, AppError> {
    validate_score_text(&request.text, &state.config.limits)?;

    let scorer = Arc::clone(&state.ats_scorer);
    let report = run_blocking(move || scorer.score(&request.text)).await?;

    info!(
        overall_score = report.overall_score,
        words = report.stats.word_count,
        "ATS score computed"
    );
    Ok(Json(report))
}

/// POST /api/v1/documents/detect
///
/// Estimates whether a document was machine- or human-written.
pub async fn handle_detect(
    State(state): State<AppState>,
    AppJson(request): AppJson<DetectRequest>,
) -> Result<Json<DetectResponse>, AppError> {
    validate_document(
        &request.document_content,
        &request.document_name,
        &state.config.limits,
    )?;

    let detector = Arc::clone(&state.detector);
    let content = request.document_content;
    let result = run_blocking(move || detector.classify(&content)).await?;

    let detection_id = Uuid::new_v4();
    info!(
        %detection_id,
        ai_probability = result.ai_probability,
        patterns = result.patterns.len(),
        words = result.stats.word_count,
        "Document classified"
    );

    Ok(Json(DetectResponse {
        detection_id,
        document_name: request.document_name,
        result,
    }))
}
