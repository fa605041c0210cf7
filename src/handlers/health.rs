//! Health check endpoint for service monitoring.
//!
//! Used by orchestration health probes and load balancers to verify the
//! process is serving. The gate middleware passes `/healthz` through without
//! credential checks, so this endpoint never requires authentication.

/// Health check handler.
///
/// Returns 200 with body `OK`.
pub async fn health_check() -> &'static str {
    "OK"
}
