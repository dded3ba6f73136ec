//! Coding Arena - Event Service
//!
//! This library implements the event lifecycle and registration subsystem of
//! the Coding Arena competition platform.
//!
//! # Features
//!
//! - Time-derived event status (`upcoming` / `live` / `ended`) with a fixed
//!   three-hour live window, recomputed before every persist
//! - Registration admission control: duplicate, deadline, and capacity gates
//! - Per-event serialization of roster mutations (no duplicate or
//!   over-capacity races)
//! - Events persisted as single JSONB documents with an embedded roster
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Store**: Persistence port with Postgres and in-memory implementations
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
