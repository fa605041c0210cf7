//! Authorization gate middleware.
//!
//! This middleware intercepts every request to:
//! 1. Record the request path and headers in the diagnostic log
//! 2. Evaluate the decision tree (health-check bypass, then Basic-auth check)
//! 3. Forward admitted requests, reject everything else with HTTP 401

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{
    error::AppError, models::credentials::Decision, services::authz, state::AppState,
};

/// Gate middleware function.
///
/// # Flow
///
/// 1. Log the path and full header set (unconditional, before any decision)
/// 2. Extract the `Authorization` header as a string, if present
/// 3. Run [`authz::evaluate`]
/// 4. Health-check and authorized requests proceed to their handler;
///    everything else returns 401 immediately and never reaches one
///
/// The rejection is an early return, so no downstream code ever observes a
/// request that failed the credential check.
pub async fn gate_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path();

    // Diagnostic side effect: runs for every request, health checks included
    state.log.record(path, request.headers());

    // Header values that are not valid ASCII count as absent
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match authz::evaluate(path, authorization, &state.config) {
        Decision::HealthCheckOk | Decision::Authorized => Ok(next.run(request).await),
        Decision::Unauthorized => Err(AppError::Unauthorized),
    }
}
