//! # API Errors
//!
//! Error types for the movie HTTP API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::schema::{FieldIssue, ValidationError};
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Movie API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Candidate record failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No movie with the requested id
    #[error("Movie not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Internal failure in the store
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Internal(detail) => ApiError::Internal(detail),
        }
    }
}

/// Body for validation failures: the issue list under an `error` key
#[derive(Debug, Serialize)]
pub struct ValidationBody {
    pub error: Vec<FieldIssue>,
}

/// Body for every other outcome that is just a message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(error) => {
                let body = Json(ValidationBody {
                    error: error.issues,
                });
                (status, body).into_response()
            }
            other => {
                let body = Json(MessageResponse {
                    message: other.to_string(),
                });
                (status, body).into_response()
            }
        }
    }
}
