//! Error types and HTTP error response handling.
//!
//! This module defines the application error and how it is converted into an
//! HTTP response with the appropriate status code and body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application-wide error type.
///
/// The authorization surface is deliberately binary: a request either passes
/// the gate or it receives `Unauthorized`. Missing, malformed, and mismatched
/// credentials all collapse into the same variant so the caller cannot tell
/// them apart from the response.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Credentials are missing, malformed, or do not match the configured pair.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Unauthorized")]
    Unauthorized,
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers and middleware to return
/// `Result<T, AppError>` and have errors automatically converted to proper
/// HTTP responses.
///
/// The body is the literal text `Unauthorized` — callers behind the proxy
/// expect the plain-text form, not a structured payload.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
            }
        }
    }
}
