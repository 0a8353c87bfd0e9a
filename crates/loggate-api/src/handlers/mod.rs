pub mod alerts;
pub mod logs;
pub mod rules;

use crate::{
    envelope::Envelope,
    error::{ApiError, ApiResult},
};
use axum::http::Uri;

/// `GET /health`
pub async fn health() -> ApiResult<()> {
    Ok(Envelope::done("service healthy"))
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
