//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The directory is immutable after startup; sessions are the only shared
//! mutable data and carry their own lock.

use std::sync::Arc;

use crate::config::Config;
use crate::services::directory::Directory;
use crate::services::session::SessionStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub directory: Arc<Directory>,
    pub sessions: SessionStore,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, directory: Directory) -> Self {
        let sessions = SessionStore::new(config.session_ttl);
        Self { config: Arc::new(config), directory: Arc::new(directory), sessions }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
