//! API error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use satcurve_charts::ChartError;
use satcurve_core::CoreError;

/// API error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (malformed input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Validation error (well-formed but unusable input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unexpected failure during generation.
    #[error("Generation failed: {0}. Check that the input is a tab-separated table with a header row.")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Wrapped error details.
    pub error: ErrorBody,
}

/// Error body details.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Stable machine-readable code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "GENERATION_ERROR"),
        };

        let body = Json(ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: self.to_string(),
            },
        });

        (status, body).into_response()
    }
}

// Conversions from domain errors
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MissingColumns { .. } | CoreError::EmptyInput | CoreError::InvalidRatio { .. } => {
                ApiError::Validation(err.to_string())
            }
            CoreError::InvalidSeries { .. } | CoreError::Table { .. } => {
                ApiError::BadRequest(err.to_string())
            }
        }
    }
}

impl From<ChartError> for ApiError {
    fn from(err: ChartError) -> Self {
        match err {
            ChartError::Core(core) => core.into(),
            ChartError::Curve(curve) => ApiError::Internal(curve.to_string()),
        }
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
