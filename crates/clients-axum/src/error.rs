//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` and extractor rejections to HTTP status codes and
//! `{message, error?, errors?}` response bodies.

use std::error::Error as _;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use clients_core::{CoreError, PhotoStoreError};
use serde::Serialize;
use thiserror::Error;

/// Message sent with every field-level validation failure.
pub const VALIDATION_MESSAGE: &str = "The client data is invalid";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (malformed input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request body failed field constraints.
    #[error("The client data is invalid: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Internal server error, with the underlying cause when known.
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        cause: Option<String>,
    },
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message,
                    error: None,
                    errors: None,
                },
            ),
            Self::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    message,
                    error: None,
                    errors: None,
                },
            ),
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: VALIDATION_MESSAGE.to_string(),
                    error: None,
                    errors: Some(errors),
                },
            ),
            Self::Internal { message, cause } => {
                tracing::error!(error = cause.as_deref().unwrap_or("unknown"), "{message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        message,
                        error: cause,
                        errors: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(errors) => Self::Validation(errors),
            CoreError::NotFound(message) => Self::NotFound(message),
            CoreError::Photo(PhotoStoreError::InvalidName(name)) => {
                Self::BadRequest(PhotoStoreError::InvalidName(name).to_string())
            }
            CoreError::Photo(missing @ PhotoStoreError::NotFound(_)) => {
                Self::NotFound(missing.to_string())
            }
            other => Self::Internal {
                message: other.to_string(),
                cause: other.source().map(ToString::to_string),
            },
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
