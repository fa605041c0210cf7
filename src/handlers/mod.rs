//! HTTP request handlers (route handlers).
//!
//! Handlers here only run for requests the gate middleware has already
//! admitted; they carry no authorization logic of their own.

/// Allowed-request terminal response
pub mod allow;
/// Health check endpoint
pub mod health;
