//! Error types for the discount API
//!
//! This module defines error types for each layer:
//! - `StoreAccessError`: The discount store could not be read (fatal for the request)
//! - `AppError`: Application layer errors (wraps store errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Discount store errors
///
/// Every variant is fatal for the computation that triggered it. Nothing is
/// retried and no partial result is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreAccessError {
    /// Access configuration is missing or malformed
    #[error("Database configuration error: {0}")]
    Configuration(String),

    /// The store is unreachable or rejected the credentials
    #[error("Database connection failed: {0}")]
    Connection(String),

    /// The query could not be executed
    #[error("Database access failed: {0}")]
    Query(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    StoreAccess(#[from] StoreAccessError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::StoreAccess(e) => {
                tracing::error!("Store access error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
