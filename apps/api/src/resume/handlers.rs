use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::analysis::{run_blocking, ScoreReport};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::resume::ResumeDraft;
use crate::render::{render_resume_html, Audience};
use crate::resume::{resume_plain_text, resume_title, validate_draft, TEMPLATE_NAME};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub title: String,
    pub template_name: &'static str,
    pub html: String,
    pub ats_report: ScoreReport,
}

#[derive(Debug, Serialize)]
pub struct PublicPreviewResponse {
    pub html: String,
}

/// POST /api/v1/resumes/preview
///
/// Renders the owner's view of a draft and scores its plain-text rendition.
pub async fn handle_preview(
    State(state): State<AppState>,
    AppJson(draft): AppJson<ResumeDraft>,
) -> Result<Json<PreviewResponse>, AppError> {
    validate_draft(&draft)?;

    let title = resume_title(&draft.personal_info.name, Utc::now().date_naive());
    let scorer = Arc::clone(&state.ats_scorer);
    let page_title = title.clone();
    let (html, ats_report) = run_blocking(move || {
        let html = render_resume_html(&draft, &page_title, Audience::Owner);
        let report = scorer.score(&resume_plain_text(&draft));
        (html, report)
    })
    .await?;

    info!(
        overall_score = ats_report.overall_score,
        html_bytes = html.len(),
        "Resume preview rendered"
    );

    Ok(Json(PreviewResponse {
        title,
        template_name: TEMPLATE_NAME,
        html,
        ats_report,
    }))
}

/// POST /api/v1/resumes/public-preview
///
/// Shareable view: email and phone are never rendered.
pub async fn handle_public_preview(
    AppJson(draft): AppJson<ResumeDraft>,
) -> Result<Json<PublicPreviewResponse>, AppError> {
    let name = draft.personal_info.name.trim();
    let title = if name.is_empty() {
        "Resume".to_string()
    } else {
        format!("{name} - Resume")
    };
    let html = render_resume_html(&draft, &title, Audience::Public);

    info!(html_bytes = html.len(), "Public resume preview rendered");
    Ok(Json(PublicPreviewResponse { html }))
}
