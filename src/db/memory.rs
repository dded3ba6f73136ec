//! In-memory event store
//!
//! A `HashMap`-backed implementation of [`EventStore`] with the same
//! last-write-wins semantics as the Postgres store. Used by service tests and
//! handy for local development without a database.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    db::store::EventStore,
    error::{AppError, AppResult},
    models::{Event, EventStatus},
};

/// In-memory [`EventStore`]
#[derive(Default)]
pub struct InMemoryEventStore {
    events: RwLock<HashMap<Uuid, Event>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn insert(&self, event: &Event) -> AppResult<()> {
        let mut events = self.events.write().await;
        if events.contains_key(&event.id) {
            return Err(AppError::Database(format!(
                "Duplicate event id {}",
                event.id
            )));
        }
        events.insert(event.id, event.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Event>> {
        Ok(self.events.read().await.get(id).cloned())
    }

    async fn save(&self, event: &Event) -> AppResult<()> {
        let mut events = self.events.write().await;
        match events.get_mut(&event.id) {
            Some(existing) => {
                *existing = event.clone();
                Ok(())
            }
            None => Err(AppError::NotFound("Event not found".to_string())),
        }
    }

    async fn list_upcoming(&self, limit: i64) -> AppResult<Vec<Event>> {
        let events = self.events.read().await;
        let mut upcoming: Vec<Event> = events
            .values()
            .filter(|e| e.status == EventStatus::Upcoming && e.is_active && e.is_published)
            .cloned()
            .collect();
        upcoming.sort_by_key(|e| e.date);
        upcoming.truncate(limit.max(0) as usize);
        Ok(upcoming)
    }

    async fn list_live(&self) -> AppResult<Vec<Event>> {
        let events = self.events.read().await;
        let mut live: Vec<Event> = events
            .values()
            .filter(|e| e.status == EventStatus::Live && e.is_active && e.is_published)
            .cloned()
            .collect();
        live.sort_by_key(|e| e.date);
        Ok(live)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use crate::models::{Difficulty, EventCategory};

    fn event(date_offset: Duration, status: EventStatus) -> Event {
        let now = Utc::now();
        Event {
            id: Uuid::new_v4(),
            title: "Store Test Event".to_string(),
            description: "Fixture for store tests.".to_string(),
            long_description: None,
            category: EventCategory::Dsa,
            difficulty: Difficulty::Easy,
            date: now + date_offset,
            registration_deadline: None,
            max_participants: 100,
            status,
            participants: vec![],
            prize_pool: None,
            rules: vec![],
            schedule: vec![],
            problem_statements: vec![],
            tags: vec![],
            is_active: true,
            is_published: true,
            created_by: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_save_requires_existing_document() {
        let store = InMemoryEventStore::new();
        let e = event(Duration::days(1), EventStatus::Upcoming);
        assert!(matches!(store.save(&e).await, Err(AppError::NotFound(_))));

        store.insert(&e).await.unwrap();
        assert!(store.save(&e).await.is_ok());
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_ids() {
        let store = InMemoryEventStore::new();
        let e = event(Duration::days(1), EventStatus::Upcoming);
        store.insert(&e).await.unwrap();
        assert!(store.insert(&e).await.is_err());
    }

    #[tokio::test]
    async fn test_list_upcoming_sorts_and_limits() {
        let store = InMemoryEventStore::new();
        let later = event(Duration::days(3), EventStatus::Upcoming);
        let sooner = event(Duration::days(1), EventStatus::Upcoming);
        let mut unpublished = event(Duration::days(2), EventStatus::Upcoming);
        unpublished.is_published = false;

        store.insert(&later).await.unwrap();
        store.insert(&sooner).await.unwrap();
        store.insert(&unpublished).await.unwrap();

        let listed = store.list_upcoming(10).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, sooner.id);
        assert_eq!(listed[1].id, later.id);

        let limited = store.list_upcoming(1).await.unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].id, sooner.id);
    }

    #[tokio::test]
    async fn test_list_live_filters_on_persisted_status() {
        let store = InMemoryEventStore::new();
        let live = event(Duration::hours(-1), EventStatus::Live);
        let upcoming = event(Duration::days(1), EventStatus::Upcoming);
        store.insert(&live).await.unwrap();
        store.insert(&upcoming).await.unwrap();

        let listed = store.list_live().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, live.id);
    }
}
