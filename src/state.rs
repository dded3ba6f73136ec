//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use redis::aio::ConnectionManager;

use crate::{config::Config, db::EventStore, services::EventService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Event business logic, holding the persistence port
    pub events: EventService,

    /// Redis connection manager (rate limiting)
    pub redis: ConnectionManager,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(store: Arc<dyn EventStore>, redis: ConnectionManager, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                events: EventService::new(store),
                redis,
                config,
            }),
        }
    }

    /// Get a reference to the event service
    pub fn events(&self) -> &EventService {
        &self.inner.events
    }

    /// Get a clone of the Redis connection manager
    pub fn redis(&self) -> ConnectionManager {
        self.inner.redis.clone()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
