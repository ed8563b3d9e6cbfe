//! Error types for the PDF Library server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::pdf::RenderError;
use crate::storage::StorageError;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Page rendering is unavailable")]
    RenderUnavailable,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::RenderUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "render_unavailable",
                "Page rendering is not available on this server".to_string(),
            ),
            AppError::Storage(e) => match e {
                StorageError::NotFound(name) => (
                    StatusCode::NOT_FOUND,
                    "not_found",
                    format!("Document not found: {}", name),
                ),
                StorageError::InvalidFileName(_) | StorageError::NotPdf(_) => {
                    (StatusCode::BAD_REQUEST, "bad_request", e.to_string())
                }
                StorageError::Io(io) => {
                    tracing::error!("Storage IO error: {}", io);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "storage_error",
                        "Storage error".to_string(),
                    )
                }
            },
            AppError::Render(e) => match e {
                RenderError::PageNotFound(..) => {
                    (StatusCode::NOT_FOUND, "not_found", e.to_string())
                }
                _ => {
                    tracing::error!("Render error: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "render_error",
                        "Failed to render page".to_string(),
                    )
                }
            },
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
            details: if cfg!(debug_assertions) {
                Some(self.to_string())
            } else {
                None
            },
        });

        (status, body).into_response()
    }
}
