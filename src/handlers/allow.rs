//! Terminal response for authorized requests.

use axum::http::StatusCode;

/// Catch-all handler for every non-health path.
///
/// The gate middleware has already verified credentials by the time this
/// runs, so the only job left is to signal "allowed" to the calling proxy:
/// 200 with an empty body.
pub async fn allow() -> StatusCode {
    StatusCode::OK
}
