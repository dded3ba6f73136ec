//! Event management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Event routes
pub fn routes() -> Router<AppState> {
    Router::new()
        // Listings
        .route("/upcoming", get(handler::list_upcoming))
        .route("/live", get(handler::list_live))
        // Event detail and creation
        .route("/", post(handler::create_event))
        .route("/{id}", get(handler::get_event))
        // Participation
        .route("/{id}/register", post(handler::register_for_event))
        .route("/{id}/unregister", post(handler::unregister_from_event))
}
