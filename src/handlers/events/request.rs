//! Event request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::constants::{
    MAX_EVENT_DESCRIPTION_LENGTH, MAX_EVENT_LONG_DESCRIPTION_LENGTH, MAX_EVENT_TITLE_LENGTH,
    MAX_RULE_LENGTH, MAX_TAG_LENGTH, MIN_EVENT_DESCRIPTION_LENGTH, MIN_EVENT_TITLE_LENGTH,
};
use crate::models::{
    Difficulty, EventCategory, PrizePool, ProblemStatement, ScheduleItem,
};

/// Create event request
///
/// Temporal and capacity invariants (future date, deadline ordering, capacity
/// bounds, problem constraint floors) are enforced by the domain model; this
/// DTO only validates shape and lengths.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = MIN_EVENT_TITLE_LENGTH, max = MAX_EVENT_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = MIN_EVENT_DESCRIPTION_LENGTH, max = MAX_EVENT_DESCRIPTION_LENGTH))]
    pub description: String,

    #[validate(length(max = MAX_EVENT_LONG_DESCRIPTION_LENGTH))]
    pub long_description: Option<String>,

    pub category: EventCategory,

    pub difficulty: Difficulty,

    /// Scheduled start time (must be in the future)
    pub date: DateTime<Utc>,

    /// Registration cutoff (defaults to `date` when absent)
    pub registration_deadline: Option<DateTime<Utc>>,

    /// Participant capacity, 1..=10000 (defaults to 500)
    pub max_participants: Option<u32>,

    pub prize_pool: Option<PrizePool>,

    #[validate(custom(function = validate_rules))]
    pub rules: Option<Vec<String>>,

    pub schedule: Option<Vec<ScheduleItem>>,

    pub problem_statements: Option<Vec<ProblemStatement>>,

    #[validate(custom(function = validate_tags))]
    pub tags: Option<Vec<String>>,

    /// Whether the event appears in public listings (defaults to false)
    pub is_published: Option<bool>,
}

fn validate_rules(rules: &Vec<String>) -> Result<(), ValidationError> {
    if rules.iter().any(|r| r.len() as u64 > MAX_RULE_LENGTH) {
        return Err(ValidationError::new("rule_too_long"));
    }
    Ok(())
}

fn validate_tags(tags: &Vec<String>) -> Result<(), ValidationError> {
    if tags.iter().any(|t| t.len() as u64 > MAX_TAG_LENGTH) {
        return Err(ValidationError::new("tag_too_long"));
    }
    Ok(())
}

/// Query parameters for the upcoming-events listing
#[derive(Debug, Deserialize)]
pub struct UpcomingEventsQuery {
    /// Maximum number of events to return (default 10)
    pub limit: Option<i64>,
}
