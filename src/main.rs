//! Authorization Gate - Main Application Entry Point
//!
//! This is a minimal HTTP authorization check-point meant to sit behind a
//! proxy as an external authorization callout. Every request is checked
//! against a Basic-auth credential pair supplied via the environment, with an
//! unauthenticated `/healthz` bypass for orchestration probes.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Authorization**: HTTP Basic authentication against env-supplied credentials
//! - **Format**: plain-text responses (`OK` / `Unauthorized` / empty)
//!
//! # Startup Flow
//!
//! 1. Load the credential pair from environment variables
//! 2. Build the HTTP router with the gate middleware
//! 3. Start the server on port 8080

mod config;
mod error;
mod handlers;
mod logging;
mod middleware;
mod models;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use axum::{
    Router, middleware as axum_middleware,
    routing::any,
};
use tower_http::trace::TraceLayer;

use crate::logging::TracingRequestLog;
use crate::state::AppState;

/// Port the gate listens on. The calling proxy addresses this service
/// directly, so the port is part of the deployment contract rather than
/// configuration.
const PORT: u16 = 8080;

/// Build the HTTP router.
///
/// The gate middleware wraps the whole surface: `/healthz` (any method) is
/// routed to the health handler, and every other path falls through to the
/// allow handler — which only ever runs for requests the gate admitted.
fn app(state: AppState) -> Router {
    Router::new()
        .route(
            services::authz::HEALTH_CHECK_PATH,
            any(handlers::health::health_check),
        )
        .fallback(handlers::allow::allow)
        // Apply the gate to every request, health checks included
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::gate::gate_middleware,
        ))
        // Add tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load the expected credential pair
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let state = AppState::new(config, Arc::new(TracingRequestLog));
    let router = app(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{PORT}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("authz gate listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use axum::{
        body::Body,
        http::{HeaderMap, Request, StatusCode, header},
    };
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use tower::ServiceExt;

    use super::*;
    use crate::{config::Config, logging::RequestLog};

    /// Test logger that records every call instead of writing anywhere.
    #[derive(Default)]
    struct RecordingLog {
        entries: Mutex<Vec<(String, HeaderMap)>>,
    }

    impl RequestLog for RecordingLog {
        fn record(&self, path: &str, headers: &HeaderMap) {
            self.entries
                .lock()
                .unwrap()
                .push((path.to_string(), headers.clone()));
        }
    }

    fn test_state() -> (AppState, Arc<RecordingLog>) {
        let log = Arc::new(RecordingLog::default());
        let config = Config {
            auth_user: "admin".to_string(),
            auth_pass: "secret".to_string(),
        };
        (AppState::new(config, log.clone()), log)
    }

    fn basic_header(user: &str, pass: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{user}:{pass}")))
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn healthz_is_ok_without_credentials() {
        let (state, _) = test_state();
        let request = Request::get("/healthz").body(Body::empty()).unwrap();

        let (status, body) = send(app(state), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn healthz_ignores_bad_credentials() {
        let (state, _) = test_state();
        let request = Request::get("/healthz")
            .header(header::AUTHORIZATION, basic_header("admin", "wrong"))
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app(state), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        let (state, _) = test_state();
        let request = Request::get("/data").body(Body::empty()).unwrap();

        let (status, body) = send(app(state), request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, "Unauthorized");
    }

    #[tokio::test]
    async fn malformed_header_is_rejected() {
        let (state, _) = test_state();
        let request = Request::get("/data")
            .header(header::AUTHORIZATION, "Basic this-is-not-base64!!")
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app(state), request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, "Unauthorized");
    }

    #[tokio::test]
    async fn matching_credentials_are_allowed_with_empty_body() {
        let (state, _) = test_state();
        let request = Request::get("/data")
            .header(header::AUTHORIZATION, basic_header("admin", "secret"))
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app(state), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "");
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let (state, _) = test_state();
        let request = Request::get("/data")
            .header(header::AUTHORIZATION, basic_header("admin", "wrong"))
            .body(Body::empty())
            .unwrap();

        let (status, body) = send(app(state), request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, "Unauthorized");
    }

    #[tokio::test]
    async fn repeated_requests_yield_the_same_outcome() {
        let (state, _) = test_state();
        let router = app(state);

        for _ in 0..3 {
            let request = Request::get("/data")
                .header(header::AUTHORIZATION, basic_header("admin", "secret"))
                .body(Body::empty())
                .unwrap();
            let (status, _) = send(router.clone(), request).await;
            assert_eq!(status, StatusCode::OK);
        }

        for _ in 0..3 {
            let request = Request::get("/data").body(Body::empty()).unwrap();
            let (status, _) = send(router.clone(), request).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
        }
    }

    #[tokio::test]
    async fn every_request_is_logged_with_path_and_headers() {
        let (state, log) = test_state();
        let router = app(state);

        // One admitted, one health check, one rejected
        let request = Request::get("/data")
            .header(header::AUTHORIZATION, basic_header("admin", "secret"))
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();
        send(router.clone(), request).await;

        let request = Request::get("/healthz").body(Body::empty()).unwrap();
        send(router.clone(), request).await;

        let request = Request::get("/denied").body(Body::empty()).unwrap();
        send(router, request).await;

        let entries = log.entries.lock().unwrap();
        let paths: Vec<&str> = entries.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(paths, ["/data", "/healthz", "/denied"]);

        // The full header set is recorded, Authorization included
        assert!(entries[0].1.contains_key(header::AUTHORIZATION));
        assert_eq!(entries[0].1.get("x-request-id").unwrap(), "abc-123");
    }
}
