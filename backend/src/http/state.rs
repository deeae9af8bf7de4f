//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::ClimateRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for dataset queries
    pub repository: Arc<dyn ClimateRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn ClimateRepository>) -> Self {
        Self { repository }
    }
}
