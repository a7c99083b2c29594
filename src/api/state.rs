//! Application State
//!
//! Shared, read-only state for the mock server's handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::visitors::VisitorRecord;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The payload served by `GET /`
    pub visitors: Arc<Vec<VisitorRecord>>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(visitors: Vec<VisitorRecord>) -> Self {
        Self {
            visitors: Arc::new(visitors),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
