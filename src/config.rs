//! Application configuration management.
//!
//! This module handles loading the expected credential pair from environment
//! variables. It uses the `envy` crate to automatically deserialize
//! environment variables into a type-safe struct.

use serde::Deserialize;

/// Expected Basic-auth credentials, loaded once at process startup.
///
/// # Environment Variables
///
/// - `AUTH_USER`: expected username
/// - `AUTH_PASS`: expected password
///
/// Both default to the empty string when unset. An empty expected value can
/// never match a non-empty supplied credential, so running without the
/// variables rejects every authenticated request rather than failing startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auth_user: String,

    #[serde(default)]
    pub auth_pass: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values cannot be decoded into
    /// the expected types.
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Parse environment variables into Config struct
        // Field names are automatically converted: auth_user -> AUTH_USER
        envy::from_env::<Config>()
    }
}
