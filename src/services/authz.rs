//! Authorization decision logic.
//!
//! Two pure functions make up the whole gate:
//!
//! 1. [`parse_basic`] turns an `Authorization` header value into credentials
//! 2. [`evaluate`] runs the decision tree over one request
//!
//! Neither touches axum's request type, so the decision logic is testable
//! without standing up an HTTP server.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::{
    config::Config,
    models::credentials::{Credentials, Decision},
};

/// Path that bypasses credential checks entirely.
///
/// Orchestration health probes hit this unauthenticated; it must never
/// require credentials.
pub const HEALTH_CHECK_PATH: &str = "/healthz";

/// Parse a `Basic` scheme `Authorization` header value into credentials.
///
/// Expected header format:
/// ```text
/// Authorization: Basic <base64(username:password)>
/// ```
///
/// The decoded payload is split at the *first* colon, so passwords may
/// themselves contain colons. Returns `None` for any malformed input:
/// wrong scheme, invalid base64, non-UTF-8 payload, or a payload without
/// a colon. Malformed and absent headers are deliberately equivalent to
/// the caller.
pub fn parse_basic(header: &str) -> Option<Credentials> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let payload = String::from_utf8(decoded).ok()?;

    let (username, password) = payload.split_once(':')?;

    Some(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Evaluate one request against the gate.
///
/// The decision tree, first match wins:
///
/// 1. Health-check path → [`Decision::HealthCheckOk`], credentials ignored
/// 2. Missing or malformed `Authorization` header → [`Decision::Unauthorized`]
/// 3. Parsed credentials compared byte-for-byte against the configured pair:
///    both fields equal → [`Decision::Authorized`], anything else →
///    [`Decision::Unauthorized`]
///
/// Each request gets exactly one pass; there is no state carried between
/// calls.
pub fn evaluate(path: &str, authorization: Option<&str>, config: &Config) -> Decision {
    if path == HEALTH_CHECK_PATH {
        return Decision::HealthCheckOk;
    }

    // Absent and unparseable headers fold into the same rejection; the
    // comparison below only ever runs with parsed credentials in hand.
    let Some(creds) = authorization.and_then(parse_basic) else {
        return Decision::Unauthorized;
    };

    if creds.username == config.auth_user && creds.password == config.auth_pass {
        Decision::Authorized
    } else {
        Decision::Unauthorized
    }
}
