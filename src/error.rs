//! Gateway error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type for the service. Each variant
//! maps to a numeric error code and an HTTP status, and renders as a failed
//! [`ResponseEnvelope`] so that clients always receive the same JSON shape.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::pagination::ResponseEnvelope;

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                |
/// |-----------|-----------------|----------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request            |
/// | 2000–2999 | Not Found       | 404 Not Found              |
/// | 3000–3999 | Server          | 500 Internal Server Error  |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Customer with the given ID was not found.
    #[error("customer not found: {0}")]
    CustomerNotFound(uuid::Uuid),

    /// Request could not be served as sent (e.g. unresolvable route).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A required setting is missing or malformed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A constructor received an absent value where one was required.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    PersistenceError(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::InvalidArgument(_) => 1002,
            Self::CustomerNotFound(_) => 2001,
            Self::Internal(_) => 3000,
            Self::PersistenceError(_) => 3001,
            Self::InvalidConfiguration(_) => 3002,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Self::CustomerNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidConfiguration(_) | Self::PersistenceError(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::PersistenceError(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for ApiError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::PersistenceError(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        let body = ResponseEnvelope::<()>::failed(
            message.clone(),
            vec![format!("{}: {message}", self.error_code())],
        );
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
