//! Event response DTOs
//!
//! Derived attributes (participant count, spots remaining, registration open,
//! status) are computed against the request clock, never read back from
//! storage. Problem statements are reduced to a count so hidden test cases
//! never leave the server.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Difficulty, Event, EventCategory, EventStatus, PrizePool, ScheduleItem};

/// Full event detail
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub category: EventCategory,
    pub difficulty: Difficulty,
    pub date: DateTime<Utc>,
    pub registration_deadline: Option<DateTime<Utc>>,
    pub status: EventStatus,
    pub max_participants: u32,
    pub participant_count: usize,
    pub spots_remaining: u32,
    pub registration_open: bool,
    pub prize_pool: Option<PrizePool>,
    pub rules: Vec<String>,
    pub schedule: Vec<ScheduleItem>,
    pub problem_count: usize,
    pub tags: Vec<String>,
    pub is_published: bool,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EventResponse {
    /// Build a response from an event, deriving status and the read-only
    /// attributes at `now`
    pub fn from_event(event: Event, now: DateTime<Utc>) -> Self {
        let status = event.status_at(now);
        let registration_open = event.is_registration_open(now);
        Self {
            status,
            participant_count: event.participant_count(),
            spots_remaining: event.spots_remaining(),
            registration_open,
            problem_count: event.problem_statements.len(),
            id: event.id,
            title: event.title,
            description: event.description,
            long_description: event.long_description,
            category: event.category,
            difficulty: event.difficulty,
            date: event.date,
            registration_deadline: event.registration_deadline,
            max_participants: event.max_participants,
            prize_pool: event.prize_pool,
            rules: event.rules,
            schedule: event.schedule,
            tags: event.tags,
            is_published: event.is_published,
            created_by: event.created_by,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

/// Compact event form used in listings
#[derive(Debug, Serialize)]
pub struct EventSummary {
    pub id: Uuid,
    pub title: String,
    pub category: EventCategory,
    pub difficulty: Difficulty,
    pub date: DateTime<Utc>,
    pub status: EventStatus,
    pub participant_count: usize,
    pub spots_remaining: u32,
    pub registration_open: bool,
}

impl EventSummary {
    pub fn from_event(event: &Event, now: DateTime<Utc>) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            category: event.category,
            difficulty: event.difficulty,
            date: event.date,
            status: event.status_at(now),
            participant_count: event.participant_count(),
            spots_remaining: event.spots_remaining(),
            registration_open: event.is_registration_open(now),
        }
    }
}

/// Listing response
#[derive(Debug, Serialize)]
pub struct EventsListResponse {
    pub events: Vec<EventSummary>,
    pub count: usize,
}
