//! Error handling types for HTTP handlers

use axum::{http::StatusCode, Json};

/// Error payload returned by the API
///
/// Every error response carries a single human-readable `error` message;
/// the HTTP status code distinguishes error classes.
///
/// ## Example JSON Response
/// ```json
/// {
///   "error": "Fragment file not found: missing.frag"
/// }
/// ```
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    /// HTTP status code for this error
    ///
    /// Not serialized to JSON - used internally for response construction
    #[serde(skip)]
    pub status_code: StatusCode,

    /// Human-readable error message
    pub error: String,
}

/// Trait for error types that can be converted to HTTP error responses
pub trait IntoErrorResponse: std::fmt::Display + Send + Sync + 'static {
    /// Returns the HTTP status code for this error
    fn status_code(&self) -> StatusCode;
}

impl<E> From<E> for ErrorResponse
where
    E: IntoErrorResponse,
{
    fn from(error: E) -> Self {
        ErrorResponse {
            status_code: error.status_code(),
            error: error.to_string(),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.error.fmt(f)
    }
}

impl axum::response::IntoResponse for ErrorResponse {
    fn into_response(self) -> axum::response::Response {
        (self.status_code, Json(self)).into_response()
    }
}
