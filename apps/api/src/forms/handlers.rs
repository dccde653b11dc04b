use axum::Json;
use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::forms::contact::{ContactForm, ContactSubmission};
use crate::forms::service_request::{
    estimate_quote, QuoteEstimate, ServiceRate, ServiceRequestForm, CATALOG,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub id: Uuid,
    pub message: &'static str,
    pub status: &'static str,
    pub submission: ContactSubmission,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequestResponse {
    pub request_id: Uuid,
    pub service_category: String,
    pub service_type: String,
    #[serde(flatten)]
    pub estimate: QuoteEstimate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub category: &'static str,
    pub service_type: &'static str,
    #[serde(flatten)]
    pub rate: ServiceRate,
}

/// POST /api/v1/contact
pub async fn handle_contact(
    AppJson(form): AppJson<ContactForm>,
) -> Result<Json<ContactResponse>, AppError> {
    let submission = form.validate()?;
    let id = Uuid::new_v4();

    info!(
        contact_id = %id,
        service = submission.service.as_deref().unwrap_or("-"),
        has_phone = submission.phone.is_some(),
        "Contact message accepted"
    );

    Ok(Json(ContactResponse {
        id,
        message: "Contact form submitted successfully",
        status: "unread",
        submission,
    }))
}

/// POST /api/v1/service-requests
///
/// Validates the request and returns a quote from the catalogue.
pub async fn handle_service_request(
    AppJson(form): AppJson<ServiceRequestForm>,
) -> Result<Json<ServiceRequestResponse>, AppError> {
    let submission = form.validate()?;
    let estimate = estimate_quote(
        &submission.service_category,
        &submission.service_type,
        submission.urgency.as_deref(),
        Utc::now().date_naive(),
    );
    let request_id = Uuid::new_v4();

    info!(
        %request_id,
        category = %submission.service_category,
        service_type = %submission.service_type,
        priority = ?estimate.priority,
        estimated_cost = ?estimate.estimated_cost,
        "Service request accepted"
    );

    Ok(Json(ServiceRequestResponse {
        request_id,
        service_category: submission.service_category,
        service_type: submission.service_type,
        estimate,
    }))
}

/// GET /api/v1/services/catalog
pub async fn handle_catalog() -> Json<Vec<CatalogEntry>> {
    Json(
        CATALOG
            .iter()
            .map(|&(category, service_type, rate)| CatalogEntry {
                category,
                service_type,
                rate,
            })
            .collect(),
    )
}
