pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::errors::AppError;
use crate::forms::handlers as forms;
use crate::resume::handlers as resume;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.limits.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Document analysis
        .route("/api/v1/ats/score", post(analysis::handle_ats_score))
        .route("/api/v1/documents/detect", post(analysis::handle_detect))
        // Resume builder
        .route("/api/v1/resumes/preview", post(resume::handle_preview))
        .route(
            "/api/v1/resumes/public-preview",
            post(resume::handle_public_preview),
        )
        // Public forms
        .route("/api/v1/contact", post(forms::handle_contact))
        .route(
            "/api/v1/service-requests",
            post(forms::handle_service_request),
        )
        .route("/api/v1/services/catalog", get(forms::handle_catalog))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
