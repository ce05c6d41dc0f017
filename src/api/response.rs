//! Response types for the Price Point Engine API.
//!
//! This module defines the success and error response structures and the
//! mapping from [`EngineError`] to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::PricePoint;

/// Success body for the `/api/price-points` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePointsResponse {
    /// The four discount tiers, in schedule order.
    pub price_points: Vec<PricePoint>,
}

/// API error response structure.
///
/// Validation failures carry only the `error` message; other failures add a
/// machine-readable `code`, and unexpected failures add diagnostic detail
/// outside production.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message.
    pub error: String,
    /// Error code for programmatic handling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Diagnostic detail, present only outside production.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ApiError {
    /// Creates an error body carrying only a message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
            stack: None,
        }
    }

    /// Creates an error body with a machine-readable code.
    pub fn with_code(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: Some(code.into()),
            stack: None,
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Maps an [`EngineError`] to its HTTP status and error body.
    ///
    /// Diagnostic detail for unexpected failures is included only when
    /// `is_production` is false.
    pub fn from_error(error: EngineError, is_production: bool) -> Self {
        match error {
            EngineError::Validation { message, .. } => Self {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(message),
            },
            EngineError::NotFound { message } => Self {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_code(message, "NOT_FOUND"),
            },
            EngineError::Server { message } => {
                let stack = (!is_production).then(|| message.clone());
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError {
                        error: message,
                        code: Some("SERVER_ERROR".to_string()),
                        stack,
                    },
                }
            }
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}
