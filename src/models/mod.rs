//! Data models for the authorization decision.
//!
//! This module contains the plain data structures the gate operates on.
//! Nothing here touches axum types; the models stay usable from pure code.

/// Parsed Basic-auth credentials and the per-request decision outcome
pub mod credentials;
