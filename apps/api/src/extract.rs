use axum::extract::FromRequest;

use crate::errors::AppError;

/// `Json` extractor whose rejections render as `AppError::Validation` (400)
/// instead of axum's plain-text 415/422 responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
