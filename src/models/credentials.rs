//! Credential pair and decision outcome types.

/// Credentials parsed out of a `Authorization: Basic ...` header.
///
/// Produced by [`crate::services::authz::parse_basic`] from the
/// base64-encoded `username:password` payload. Holds whatever the client
/// sent; validation against the configured pair happens separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Username portion (everything before the first `:`)
    pub username: String,

    /// Password portion (everything after the first `:`, colons included)
    pub password: String,
}

/// Outcome of evaluating one request against the gate.
///
/// Derived fresh for every request and never persisted. Each variant maps to
/// exactly one way of terminating the HTTP exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Request targeted the health-check path; respond 200 `OK` without
    /// consulting credentials
    HealthCheckOk,

    /// Supplied credentials match the configured pair; respond 200, empty body
    Authorized,

    /// Credentials missing, malformed, or mismatched; respond 401 `Unauthorized`
    Unauthorized,
}
