//! Shared application state for request handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::content::ContentStore;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the immutable configuration, the content store, and the instant
/// the state was built, from which `/health` derives its uptime.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub content: Arc<ContentStore>,
    started_at: Instant,
}

impl AppState {
    /// Creates a new application state from the given configuration and content store.
    pub fn new(config: Config, content: ContentStore) -> Self {
        Self {
            config: Arc::new(config),
            content: Arc::new(content),
            started_at: Instant::now(),
        }
    }

    /// Seconds elapsed since the state was constructed. Monotonic.
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
