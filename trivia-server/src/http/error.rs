//! API error type with IntoResponse
//!
//! Every failure is rendered as the error envelope
//! `{"success": false, "error": <status>, "message": <text>}`.
//! The cause is logged; it never reaches the response body.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Body is not JSON at all (400)
    BadRequest { reason: String },

    /// Nothing to return (404)
    NotFound { reason: String },

    /// Known route, wrong method (405)
    MethodNotAllowed,

    /// Handler ran past the configured request timeout (408)
    Timeout,

    /// Body parsed but cannot be acted on (422)
    Unprocessable { reason: String },

    /// Unexpected failure (500, logged)
    Internal { message: String },
}

/// Error envelope body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl ApiError {
    pub fn bad_request(reason: impl fmt::Display) -> Self {
        Self::BadRequest {
            reason: reason.to_string(),
        }
    }

    pub fn not_found(reason: impl fmt::Display) -> Self {
        Self::NotFound {
            reason: reason.to_string(),
        }
    }

    pub fn unprocessable(reason: impl fmt::Display) -> Self {
        Self::Unprocessable {
            reason: reason.to_string(),
        }
    }

    pub fn internal(message: impl fmt::Display) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Timeout => StatusCode::REQUEST_TIMEOUT,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "bad request",
            Self::NotFound { .. } => "not found",
            Self::MethodNotAllowed => "method not allowed",
            Self::Timeout => "request timeout",
            Self::Unprocessable { .. } => "unprocessable",
            Self::Internal { .. } => "internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::BadRequest { reason } => tracing::warn!("Bad request: {}", reason),
            Self::NotFound { reason } => tracing::debug!("Not found: {}", reason),
            Self::MethodNotAllowed => {}
            Self::Timeout => tracing::warn!("Request timed out"),
            Self::Unprocessable { reason } => tracing::warn!("Unprocessable: {}", reason),
            Self::Internal { message } => tracing::error!("Internal error: {}", message),
        }

        let status = self.status();
        // `error` always mirrors the HTTP status, 404 included.
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::unprocessable(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } => Self::not_found(e),
            DbError::MissingReference { .. } => Self::unprocessable(e),
            DbError::Sqlx(_) => Self::internal(e),
        }
    }
}
