//! HTTP middleware components.
//!
//! Middleware are functions that run before route handlers.
//! They can:
//! - Authenticate requests
//! - Log requests
//! - Short-circuit requests (reject unauthorized)

/// Basic-auth authorization gate
pub mod gate;
