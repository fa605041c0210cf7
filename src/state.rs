//! Shared application state.

use std::sync::Arc;

use crate::{config::Config, logging::RequestLog};

/// State shared with the gate middleware and handlers via Axum's `State`
/// extractor.
///
/// The credential pair is immutable after startup, so handing out `Arc`
/// clones is all the synchronization request handling needs.
#[derive(Clone)]
pub struct AppState {
    /// Expected credential pair, loaded once from the environment
    pub config: Arc<Config>,

    /// Diagnostic logger invoked for every request
    pub log: Arc<dyn RequestLog>,
}

impl AppState {
    pub fn new(config: Config, log: Arc<dyn RequestLog>) -> Self {
        Self {
            config: Arc::new(config),
            log,
        }
    }
}
