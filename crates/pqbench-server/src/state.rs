//! Application state shared across request handlers

use chrono::{DateTime, Utc};
use pqbench_storage::Database;
use std::sync::Arc;

/// Application state
pub struct AppState {
    /// Record stores
    pub db: Database,
    /// Process start time, surfaced by the status endpoint
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            db: Database::new(),
            started_at: Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Handler-facing handle to the application state
pub type SharedState = Arc<AppState>;
