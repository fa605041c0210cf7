//! Per-request diagnostic logging.
//!
//! Every request's path and full header set are recorded before the gate
//! decides anything — including health checks and requests that go on to be
//! rejected. The logger is a trait object held in the shared state so tests
//! can substitute a recording implementation instead of capturing the
//! process's output streams.

use axum::http::HeaderMap;

/// Collaborator that records one inbound request.
pub trait RequestLog: Send + Sync {
    /// Record the request path and its complete header set.
    fn record(&self, path: &str, headers: &HeaderMap);
}

/// Production logger that emits through `tracing`.
///
/// Headers are logged verbatim. Anything secret a client puts in a header
/// other than `Authorization` ends up in the diagnostic stream in full, so
/// treat the log output with the same care as the credentials themselves.
#[derive(Debug, Clone, Default)]
pub struct TracingRequestLog;

impl RequestLog for TracingRequestLog {
    fn record(&self, path: &str, headers: &HeaderMap) {
        tracing::info!(path, headers = ?headers, "incoming request");
    }
}
