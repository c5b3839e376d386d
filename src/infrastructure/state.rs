//! Application state containing the gradebook store

use std::sync::Arc;

use crate::domain::GradebookRepository;
use crate::infrastructure::InMemoryGradebookStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Students, tests and results for the lifetime of the process
    pub gradebook: Arc<dyn GradebookRepository>,
}

impl AppState {
    /// Create a new AppState backed by an empty in-memory store
    pub fn new() -> Self {
        Self::with_repository(Arc::new(InMemoryGradebookStore::new()))
    }

    pub fn with_repository(gradebook: Arc<dyn GradebookRepository>) -> Self {
        Self { gradebook }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
