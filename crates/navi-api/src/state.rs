//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use navi_chat::ChatEngine;
use navi_core::config::NaviConfig;

/// Shared application state.
///
/// Everything here is read-only after startup, so handlers share it
/// through `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<NaviConfig>,
    /// Topic resolution engine over the loaded catalog.
    pub engine: Arc<ChatEngine>,
    /// Monotonic start time for uptime.
    pub start_time: Instant,
    /// Wall-clock start time reported by `/health`.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: NaviConfig, engine: ChatEngine) -> Self {
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }
}
