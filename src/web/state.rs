//! Application State
//!
//! Shared state accessible by all page handlers.

use crate::config::Config;
use crate::source::CollectionSource;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration; the backend section drives endpoint URLs
    pub config: Arc<Config>,
    /// Where view fragments fetch their collections from
    pub source: Arc<dyn CollectionSource>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn CollectionSource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
