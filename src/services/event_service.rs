//! Event service
//!
//! Business logic for the event lifecycle: creation, registration admission
//! control, unregistration, and the listing helpers. Every read-check-mutate-
//! write sequence holds a per-event lock, which is the serialization point
//! that rules out duplicate-registration and over-capacity races against the
//! last-write-wins store.

use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    constants::DEFAULT_UPCOMING_LIMIT,
    db::EventStore,
    error::{AppError, AppResult},
    handlers::events::request::CreateEventRequest,
    models::{Event, default_max_participants},
};

/// Event service for business logic
pub struct EventService {
    store: Arc<dyn EventStore>,
    /// Per-event serialization points for roster mutations
    locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl EventService {
    /// Create a new event service backed by the given store
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self {
            store,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Get the mutation lock for one event id
    async fn lock_for(&self, event_id: Uuid) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks.entry(event_id).or_default().clone()
    }

    /// Create a new event
    pub async fn create_event(
        &self,
        created_by: &Uuid,
        payload: CreateEventRequest,
    ) -> AppResult<Event> {
        let now = Utc::now();

        let event = Event {
            id: Uuid::new_v4(),
            title: payload.title,
            description: payload.description,
            long_description: payload.long_description,
            category: payload.category,
            difficulty: payload.difficulty,
            date: payload.date,
            registration_deadline: payload.registration_deadline,
            max_participants: payload.max_participants.unwrap_or_else(default_max_participants),
            status: crate::models::EventStatus::derive(payload.date, now),
            participants: vec![],
            prize_pool: payload.prize_pool,
            rules: payload.rules.unwrap_or_default(),
            schedule: payload.schedule.unwrap_or_default(),
            problem_statements: payload.problem_statements.unwrap_or_default(),
            tags: payload
                .tags
                .unwrap_or_default()
                .into_iter()
                .map(|t| t.trim().to_lowercase())
                .collect(),
            is_active: true,
            is_published: payload.is_published.unwrap_or(false),
            created_by: *created_by,
            created_at: now,
            updated_at: now,
        };

        event.validate_at(now)?;
        self.store.insert(&event).await?;

        tracing::info!(event_id = %event.id, date = %event.date, "Event created");

        Ok(event)
    }

    /// Get an event by id
    pub async fn get_event(&self, id: &Uuid) -> AppResult<Event> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    /// Register a user for an event
    pub async fn register_user(&self, event_id: &Uuid, user_id: &Uuid) -> AppResult<Event> {
        let lock = self.lock_for(*event_id).await;
        let _guard = lock.lock().await;

        let mut event = self.get_event(event_id).await?;
        event.register(*user_id, Utc::now())?;
        self.store.save(&event).await?;

        tracing::info!(
            event_id = %event.id,
            user_id = %user_id,
            participant_count = event.participant_count(),
            "User registered for event"
        );

        Ok(event)
    }

    /// Unregister a user from an event
    pub async fn unregister_user(&self, event_id: &Uuid, user_id: &Uuid) -> AppResult<Event> {
        let lock = self.lock_for(*event_id).await;
        let _guard = lock.lock().await;

        let mut event = self.get_event(event_id).await?;
        event.unregister(*user_id, Utc::now())?;
        self.store.save(&event).await?;

        tracing::info!(
            event_id = %event.id,
            user_id = %user_id,
            participant_count = event.participant_count(),
            "User unregistered from event"
        );

        Ok(event)
    }

    /// List upcoming published events, soonest first
    pub async fn list_upcoming(&self, limit: Option<i64>) -> AppResult<Vec<Event>> {
        let limit = limit.unwrap_or(DEFAULT_UPCOMING_LIMIT).max(1);
        self.store.list_upcoming(limit).await
    }

    /// List live published events
    pub async fn list_live(&self) -> AppResult<Vec<Event>> {
        self.store.list_live().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    use crate::{
        db::{InMemoryEventStore, store::MockEventStore},
        models::{Difficulty, EventCategory, EventStatus},
    };

    fn request(date: DateTime<Utc>) -> CreateEventRequest {
        CreateEventRequest {
            title: "Midnight Marathon".to_string(),
            description: "Five problems, three hours.".to_string(),
            long_description: None,
            category: EventCategory::CompetitiveProgramming,
            difficulty: Difficulty::Hard,
            date,
            registration_deadline: None,
            max_participants: None,
            prize_pool: None,
            rules: None,
            schedule: None,
            problem_statements: None,
            tags: Some(vec!["Graphs".to_string(), " DP ".to_string()]),
            is_published: Some(true),
        }
    }

    fn service() -> EventService {
        EventService::new(Arc::new(InMemoryEventStore::new()))
    }

    #[tokio::test]
    async fn test_create_event_applies_defaults() {
        let svc = service();
        let event = svc
            .create_event(&Uuid::new_v4(), request(Utc::now() + Duration::days(1)))
            .await
            .unwrap();

        assert_eq!(event.max_participants, 500);
        assert_eq!(event.status, EventStatus::Upcoming);
        assert!(event.is_active);
        assert_eq!(event.tags, vec!["graphs".to_string(), "dp".to_string()]);
    }

    #[tokio::test]
    async fn test_create_event_rejects_past_date() {
        let svc = service();
        let result = svc
            .create_event(&Uuid::new_v4(), request(Utc::now() - Duration::hours(1)))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_register_then_duplicate_fails() {
        let svc = service();
        let event = svc
            .create_event(&Uuid::new_v4(), request(Utc::now() + Duration::days(1)))
            .await
            .unwrap();
        let user = Uuid::new_v4();

        let updated = svc.register_user(&event.id, &user).await.unwrap();
        assert_eq!(updated.participant_count(), 1);

        // Success once, AlreadyRegistered thereafter
        assert!(matches!(
            svc.register_user(&event.id, &user).await,
            Err(AppError::AlreadyRegistered)
        ));
        assert_eq!(svc.get_event(&event.id).await.unwrap().participant_count(), 1);
    }

    #[tokio::test]
    async fn test_capacity_gate_closes_registration() {
        let svc = service();
        let mut req = request(Utc::now() + Duration::days(1));
        req.max_participants = Some(1);
        let event = svc.create_event(&Uuid::new_v4(), req).await.unwrap();

        svc.register_user(&event.id, &Uuid::new_v4()).await.unwrap();
        assert!(matches!(
            svc.register_user(&event.id, &Uuid::new_v4()).await,
            Err(AppError::RegistrationClosed)
        ));
    }

    #[tokio::test]
    async fn test_register_after_event_ended_is_closed() {
        let svc = service();
        // Bypass creation validation to plant an already-ended event
        let store = Arc::new(InMemoryEventStore::new());
        let svc_ended = EventService::new(store.clone());
        let mut event = svc
            .create_event(&Uuid::new_v4(), request(Utc::now() + Duration::days(1)))
            .await
            .unwrap();
        event.date = Utc::now() - Duration::hours(4);
        event.refresh_status(Utc::now());
        assert_eq!(event.status, EventStatus::Ended);
        store.insert(&event).await.unwrap();

        assert!(matches!(
            svc_ended.register_user(&event.id, &Uuid::new_v4()).await,
            Err(AppError::RegistrationClosed)
        ));
    }

    #[tokio::test]
    async fn test_unregister_from_live_event_rejected() {
        let store = Arc::new(InMemoryEventStore::new());
        let svc = EventService::new(store.clone());
        let user = Uuid::new_v4();

        let seed = service();
        let mut event = seed
            .create_event(&Uuid::new_v4(), request(Utc::now() + Duration::days(1)))
            .await
            .unwrap();
        event.register(user, Utc::now()).unwrap();
        // Two hours in: inside the three-hour live window
        event.date = Utc::now() - Duration::hours(2);
        event.refresh_status(Utc::now());
        assert_eq!(event.status, EventStatus::Live);
        store.insert(&event).await.unwrap();

        assert!(matches!(
            svc.unregister_user(&event.id, &user).await,
            Err(AppError::EventNotUpcoming)
        ));
    }

    #[tokio::test]
    async fn test_unregister_removes_only_the_target() {
        let svc = service();
        let event = svc
            .create_event(&Uuid::new_v4(), request(Utc::now() + Duration::days(1)))
            .await
            .unwrap();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        svc.register_user(&event.id, &alice).await.unwrap();
        svc.register_user(&event.id, &bob).await.unwrap();

        let updated = svc.unregister_user(&event.id, &alice).await.unwrap();
        assert_eq!(updated.participant_count(), 1);
        assert_eq!(updated.participants[0].user, bob);

        assert!(matches!(
            svc.unregister_user(&event.id, &alice).await,
            Err(AppError::NotRegistered)
        ));
    }

    #[tokio::test]
    async fn test_unknown_event_is_not_found() {
        let svc = service();
        assert!(matches!(
            svc.register_user(&Uuid::new_v4(), &Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            svc.unregister_user(&Uuid::new_v4(), &Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_registration_admits_once() {
        let svc = Arc::new(service());
        let event = svc
            .create_event(&Uuid::new_v4(), request(Utc::now() + Duration::days(1)))
            .await
            .unwrap();
        let user = Uuid::new_v4();

        let (a, b) = tokio::join!(
            svc.register_user(&event.id, &user),
            svc.register_user(&event.id, &user),
        );

        assert_eq!(a.is_ok() as u8 + b.is_ok() as u8, 1);
        assert_eq!(svc.get_event(&event.id).await.unwrap().participant_count(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_registration_respects_capacity() {
        let svc = Arc::new(service());
        let mut req = request(Utc::now() + Duration::days(1));
        req.max_participants = Some(1);
        let event = svc.create_event(&Uuid::new_v4(), req).await.unwrap();

        let user_a = Uuid::new_v4();
        let user_b = Uuid::new_v4();
        let (a, b) = tokio::join!(
            svc.register_user(&event.id, &user_a),
            svc.register_user(&event.id, &user_b),
        );

        assert_eq!(a.is_ok() as u8 + b.is_ok() as u8, 1);
        assert_eq!(svc.get_event(&event.id).await.unwrap().participant_count(), 1);
    }

    #[tokio::test]
    async fn test_list_upcoming_uses_default_limit() {
        let svc = service();
        for day in 1..=15 {
            svc.create_event(
                &Uuid::new_v4(),
                request(Utc::now() + Duration::days(day)),
            )
            .await
            .unwrap();
        }

        let listed = svc.list_upcoming(None).await.unwrap();
        assert_eq!(listed.len(), 10);
        assert!(listed.windows(2).all(|w| w[0].date <= w[1].date));

        let limited = svc.list_upcoming(Some(3)).await.unwrap();
        assert_eq!(limited.len(), 3);
    }

    #[tokio::test]
    async fn test_store_faults_surface_unchanged() {
        let mut store = MockEventStore::new();
        store
            .expect_find_by_id()
            .returning(|_| Err(AppError::Database("connection reset".to_string())));
        let svc = EventService::new(Arc::new(store));

        assert!(matches!(
            svc.register_user(&Uuid::new_v4(), &Uuid::new_v4()).await,
            Err(AppError::Database(_))
        ));
    }
}
