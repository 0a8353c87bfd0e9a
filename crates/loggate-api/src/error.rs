//! API errors and their HTTP mapping.

use crate::envelope::Envelope;
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use loggate_core::QueryError;
use loggate_store::ServiceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Unparsable body or query string.
    #[error("{0}")]
    BadRequest(String),
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] QueryError),
    #[error("no route for {0}")]
    NotFound(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

pub type ApiResult<T> = Result<Envelope<T>, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(format!("invalid query string: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            tracing::debug!(%status, error = %self, "rejecting request");
        }
        (status, Json(Envelope::failure(self.to_string()))).into_response()
    }
}
