//! Shared application state for the UI server.

use std::sync::Arc;

use portfolio::project::Project;

/// Shared state accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Project records mounted at startup. Never mutated afterwards.
    pub projects: Arc<Vec<Project>>,
}

impl AppState {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects: Arc::new(projects),
        }
    }
}
