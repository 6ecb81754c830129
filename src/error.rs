//! Error types for the HTTP layer.
//!
//! [`AppError`] bridges domain errors and HTTP responses via Axum's
//! `IntoResponse`. Two error kinds cover the whole API: validation failures
//! surface as 400 and missing bookings as 404, both with a
//! `{"success": false, "error": msg}` body; anything unexpected becomes a
//! 500 carrying the raw error message.

use crate::tickets::ValidationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

/// Application error type for HTTP handlers.
///
/// # Examples
///
/// ```ignore
/// async fn handler(state: AppState) -> Result<Json<Value>, AppError> {
///     let booking = state.store.get(id).ok_or_else(AppError::booking_not_found)?;
///     Ok(Json(json!({ "success": true, "booking": booking })))
/// }
/// ```
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code
    status: StatusCode,
    /// Error message (user-facing)
    message: String,
    /// Internal error (for logging, not exposed to clients)
    source: Option<anyhow::Error>,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub const fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            source: None,
        }
    }

    /// Attach a source error for logging.
    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Create a 400 Bad Request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into())
    }

    /// Create the 404 response for a missing booking.
    #[must_use]
    pub fn booking_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Booking not found".to_string())
    }

    /// Create a 500 Internal Server Error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message.into())
    }

    /// The HTTP status this error maps to
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// The user-facing message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Error response body (JSON), matching the `{success, error}` envelope the
/// success responses use.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    /// Always `false`
    success: bool,
    /// Human-readable error message
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            if let Some(source) = &self.source {
                tracing::error!(
                    status = %self.status,
                    message = %self.message,
                    error = %source,
                    "internal server error"
                );
            } else {
                tracing::error!(
                    status = %self.status,
                    message = %self.message,
                    "internal server error"
                );
            }
        }

        let body = ErrorResponse {
            success: false,
            error: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

/// Business-rule and bad-input failures are client errors.
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::bad_request(err.to_string())
    }
}

/// Anything unexpected surfaces as a 500 with the raw message.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal(err.to_string()).with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_message() {
        let err = AppError::bad_request("Invalid input");
        assert_eq!(err.to_string(), "[400 Bad Request] Invalid input");
    }

    #[test]
    fn booking_not_found_is_404() {
        let err = AppError::booking_not_found();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Booking not found");
    }

    #[test]
    fn validation_errors_map_to_400() {
        let err = AppError::from(ValidationError::EmptyRequest);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "at least one ticket must be requested");
    }
}
