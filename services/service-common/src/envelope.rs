//! Error Envelope
//!
//! Every failed request, whichever service answers it, gets the same JSON body:
//!
//! ```json
//! {"timestamp": "2024-05-01T08:00:00.000Z", "status": 404, "error": "Not Found", "path": "/addresses/999"}
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Uniform JSON error body, built fresh for each failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// When the error was produced (UTC)
    pub timestamp: DateTime<Utc>,
    /// HTTP status code
    pub status: u16,
    /// Reason phrase for `status`
    pub error: String,
    /// Request path that produced the error
    pub path: String,
}

impl ErrorEnvelope {
    /// Build an envelope stamped with the current time.
    ///
    /// `error` is the canonical reason phrase of `status`, or empty when the
    /// code has none.
    pub fn new(status: StatusCode, path: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or_default().to_string(),
            path: path.into(),
        }
    }

    /// Status as an `http` type, falling back to 500 for codes outside 100..=999.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Response extension marking a body that is already an [`ErrorEnvelope`].
///
/// The fault layer leaves marked responses untouched.
#[derive(Debug, Clone, Copy)]
pub struct Enveloped;

impl IntoResponse for ErrorEnvelope {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (status, Json(self)).into_response();
        response.extensions_mut().insert(Enveloped);
        response
    }
}

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The identifier is absent, or resolving it downstream failed
    #[error("not found: {path}")]
    NotFound { path: String },

    /// Any other fault, reported with the status it resolved to
    #[error("unhandled fault ({status}) at {path}")]
    Unhandled { status: StatusCode, path: String },
}

impl ApiError {
    pub fn not_found(path: impl Into<String>) -> Self {
        ApiError::NotFound { path: path.into() }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Unhandled { status, .. } => *status,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            ApiError::NotFound { path } | ApiError::Unhandled { path, .. } => path,
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope::new(self.status(), self.path())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.envelope().into_response()
    }
}
