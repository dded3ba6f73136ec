//! Event persistence port
//!
//! The service layer talks to storage exclusively through this trait, which
//! keeps "what an Event is" independent of "how it is stored" and lets tests
//! run against an in-memory collection.

use async_trait::async_trait;
use uuid::Uuid;

use crate::{error::AppResult, models::Event};

/// Document-oriented event collection.
///
/// `save` is a whole-document replace with last-write-wins semantics; the
/// service serializes writers per event id, so the store itself needs no
/// conflict detection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Insert a new event document
    async fn insert(&self, event: &Event) -> AppResult<()>;

    /// Load an event by id
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Event>>;

    /// Replace an existing event document
    async fn save(&self, event: &Event) -> AppResult<()>;

    /// Published, active events with persisted status `upcoming`,
    /// chronologically ascending, bounded by `limit`
    async fn list_upcoming(&self, limit: i64) -> AppResult<Vec<Event>>;

    /// Published, active events with persisted status `live`
    async fn list_live(&self) -> AppResult<Vec<Event>>;
}
