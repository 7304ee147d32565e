use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::calculator::CalcError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub message: String,
}

/// Custom error type for API endpoints
///
/// Maps each failure to an HTTP status code and renders it as an
/// `ErrorResponse` JSON body.
#[derive(Debug)]
pub enum ApiError {
    /// No item with the requested id
    ItemNotFound(i64),
    /// Calculator input that has no numeric answer
    Calculation(CalcError),
    /// HTML page could not be rendered
    Template(minijinja::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::ItemNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Item not found: {}", id),
            ),
            ApiError::Calculation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Template(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template error: {}", err),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        ApiError::Calculation(err)
    }
}

impl From<minijinja::Error> for ApiError {
    fn from(err: minijinja::Error) -> Self {
        ApiError::Template(err)
    }
}
