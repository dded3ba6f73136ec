//! Event model
//!
//! The Event document is the unit of persistence: the participant roster and
//! all sub-documents are embedded so that roster and counts are always read
//! and written atomically with the event itself.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    constants::{
        DEFAULT_MAX_PARTICIPANTS, DEFAULT_MEMORY_LIMIT_MB, DEFAULT_TIME_LIMIT_MS,
        EVENT_DURATION_HOURS, MAX_MAX_PARTICIPANTS, MAX_PROBLEM_POINTS, MIN_MAX_PARTICIPANTS,
        MIN_MEMORY_LIMIT_MB, MIN_PROBLEM_POINTS, MIN_TIME_LIMIT_MS,
    },
    error::{AppError, AppResult},
    models::participant::Participant,
};

/// Event document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub category: EventCategory,
    pub difficulty: Difficulty,
    /// Scheduled start time; the event is assumed to run for
    /// [`EVENT_DURATION_HOURS`] after this instant.
    pub date: DateTime<Utc>,
    /// Optional registration cutoff; when absent, registration stays open
    /// until `date`.
    pub registration_deadline: Option<DateTime<Utc>>,
    pub max_participants: u32,
    /// Time-derived lifecycle phase. This is a cache of
    /// [`EventStatus::derive`], refreshed before every persist, never
    /// free-standing truth.
    pub status: EventStatus,
    #[serde(default)]
    pub participants: Vec<Participant>,
    pub prize_pool: Option<PrizePool>,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
    #[serde(default)]
    pub problem_statements: Vec<ProblemStatement>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_active: bool,
    pub is_published: bool,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Upper bound of the registration window
    pub fn effective_deadline(&self) -> DateTime<Utc> {
        self.registration_deadline.unwrap_or(self.date)
    }

    /// End of the live window
    pub fn end_time(&self) -> DateTime<Utc> {
        self.date + Duration::hours(EVENT_DURATION_HOURS)
    }

    /// Compute the status this event has at `now`
    pub fn status_at(&self, now: DateTime<Utc>) -> EventStatus {
        EventStatus::derive(self.date, now)
    }

    /// Recompute the cached status from the clock.
    ///
    /// Must be called before every persist so that stored status never
    /// contradicts the time-derived value at the moment of the write.
    pub fn refresh_status(&mut self, now: DateTime<Utc>) {
        self.status = self.status_at(now);
    }

    /// Number of registered participants
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Remaining capacity, saturating at zero
    pub fn spots_remaining(&self) -> u32 {
        (self.max_participants as usize).saturating_sub(self.participants.len()) as u32
    }

    /// Whether new registrations are admitted at `now`.
    ///
    /// All three gates must hold: the event has not started, the effective
    /// deadline has not passed, and capacity remains.
    pub fn is_registration_open(&self, now: DateTime<Utc>) -> bool {
        self.status_at(now) == EventStatus::Upcoming
            && now < self.effective_deadline()
            && self.spots_remaining() > 0
    }

    /// Whether `user_id` appears in the roster
    pub fn is_registered(&self, user_id: &Uuid) -> bool {
        self.participants.iter().any(|p| p.user == *user_id)
    }

    /// Admit `user_id` to the roster.
    ///
    /// Preconditions are checked in order, first failure wins: duplicate
    /// registration, then the registration-open gate. On success a fresh
    /// participation record is appended and the cached status refreshed;
    /// the caller persists the document.
    pub fn register(&mut self, user_id: Uuid, now: DateTime<Utc>) -> AppResult<()> {
        if self.is_registered(&user_id) {
            return Err(AppError::AlreadyRegistered);
        }
        if !self.is_registration_open(now) {
            return Err(AppError::RegistrationClosed);
        }

        self.participants.push(Participant::new(user_id, now));
        self.refresh_status(now);
        self.updated_at = now;
        Ok(())
    }

    /// Remove `user_id` from the roster.
    ///
    /// Only permitted while the event is still upcoming; once a contest has
    /// gone live, the roster is frozen to keep standings honest. Removes
    /// exactly one record (roster uniqueness is an invariant).
    pub fn unregister(&mut self, user_id: Uuid, now: DateTime<Utc>) -> AppResult<()> {
        let index = self
            .participants
            .iter()
            .position(|p| p.user == user_id)
            .ok_or(AppError::NotRegistered)?;

        if self.status_at(now) != EventStatus::Upcoming {
            return Err(AppError::EventNotUpcoming);
        }

        self.participants.remove(index);
        self.refresh_status(now);
        self.updated_at = now;
        Ok(())
    }

    /// Validate creation-time invariants against the clock
    pub fn validate_at(&self, now: DateTime<Utc>) -> AppResult<()> {
        if self.date <= now {
            return Err(AppError::Validation(
                "Event date must be in the future".to_string(),
            ));
        }

        if let Some(deadline) = self.registration_deadline {
            if deadline > self.date {
                return Err(AppError::Validation(
                    "Registration deadline must not be after the event date".to_string(),
                ));
            }
        }

        if !(MIN_MAX_PARTICIPANTS..=MAX_MAX_PARTICIPANTS).contains(&self.max_participants) {
            return Err(AppError::Validation(format!(
                "Maximum participants must be between {MIN_MAX_PARTICIPANTS} and {MAX_MAX_PARTICIPANTS}"
            )));
        }

        for problem in &self.problem_statements {
            problem.validate()?;
        }

        Ok(())
    }
}

/// Time-derived event status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Live,
    Ended,
}

impl EventStatus {
    /// Derive the status of an event starting at `date`, observed at `now`.
    ///
    /// Pure and idempotent: for a fixed `date` and advancing `now` the result
    /// moves through upcoming -> live -> ended, never backward.
    pub fn derive(date: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let end = date + Duration::hours(EVENT_DURATION_HOURS);
        if now < date {
            Self::Upcoming
        } else if now < end {
            Self::Live
        } else {
            Self::Ended
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upcoming => write!(f, "upcoming"),
            Self::Live => write!(f, "live"),
            Self::Ended => write!(f, "ended"),
        }
    }
}

/// Event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventCategory {
    #[serde(rename = "DSA")]
    Dsa,
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "Competitive Programming")]
    CompetitiveProgramming,
    #[serde(rename = "Hackathon")]
    Hackathon,
}

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Hard => write!(f, "Hard"),
            Self::Expert => write!(f, "Expert"),
        }
    }
}

/// Prize pool with ranked distribution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrizePool {
    pub total: String,
    #[serde(default)]
    pub distribution: Vec<PrizeAward>,
}

/// A single prize position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrizeAward {
    pub position: u32,
    pub amount: String,
}

/// Schedule entry within an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub time: String,
    pub label: String,
}

/// Problem statement attached to an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemStatement {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub points: u32,
    #[serde(default)]
    pub test_cases: Vec<TestCase>,
    #[serde(default)]
    pub constraints: ExecutionConstraints,
}

impl ProblemStatement {
    /// Validate points and execution constraint floors
    pub fn validate(&self) -> AppResult<()> {
        if !(MIN_PROBLEM_POINTS..=MAX_PROBLEM_POINTS).contains(&self.points) {
            return Err(AppError::Validation(format!(
                "Problem points must be between {MIN_PROBLEM_POINTS} and {MAX_PROBLEM_POINTS}"
            )));
        }
        if self.constraints.time_limit_ms < MIN_TIME_LIMIT_MS {
            return Err(AppError::Validation(format!(
                "Time limit must be at least {MIN_TIME_LIMIT_MS}ms"
            )));
        }
        if self.constraints.memory_limit_mb < MIN_MEMORY_LIMIT_MB {
            return Err(AppError::Validation(format!(
                "Memory limit must be at least {MIN_MEMORY_LIMIT_MB}MB"
            )));
        }
        Ok(())
    }
}

/// Problem test case; hidden cases are withheld from participants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub output: String,
    #[serde(default)]
    pub is_hidden: bool,
}

/// Per-problem execution constraints
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExecutionConstraints {
    pub time_limit_ms: u32,
    pub memory_limit_mb: u32,
}

impl Default for ExecutionConstraints {
    fn default() -> Self {
        Self {
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
            memory_limit_mb: DEFAULT_MEMORY_LIMIT_MB,
        }
    }
}

/// Default capacity when a creator does not specify one
pub fn default_max_participants() -> u32 {
    DEFAULT_MAX_PARTICIPANTS
}
