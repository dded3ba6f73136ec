//! Participant and submission models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Participation record embedded in an event's roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// Foreign user identifier; not owned by the event
    pub user: Uuid,
    pub registered_at: DateTime<Utc>,
    pub score: u32,
    pub time_completed: Option<String>,
    /// Final placement, assigned after the contest (>= 1)
    pub rank: Option<u32>,
    #[serde(default)]
    pub submissions: Vec<Submission>,
}

impl Participant {
    /// Create a fresh registration record with all fields at default
    pub fn new(user: Uuid, registered_at: DateTime<Utc>) -> Self {
        Self {
            user,
            registered_at,
            score: 0,
            time_completed: None,
            rank: None,
            submissions: vec![],
        }
    }
}

/// A code submission against one problem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub problem_id: String,
    pub code: String,
    pub language: String,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    pub score: u32,
}

/// Submission verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    RuntimeError,
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Accepted => write!(f, "accepted"),
            Self::WrongAnswer => write!(f, "wrong_answer"),
            Self::TimeLimitExceeded => write!(f, "time_limit_exceeded"),
            Self::RuntimeError => write!(f, "runtime_error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_participant_defaults() {
        let now = Utc::now();
        let p = Participant::new(Uuid::new_v4(), now);
        assert_eq!(p.score, 0);
        assert!(p.rank.is_none());
        assert!(p.submissions.is_empty());
        assert_eq!(p.registered_at, now);
    }

    #[test]
    fn test_submission_status_wire_form() {
        let status = SubmissionStatus::TimeLimitExceeded;
        assert_eq!(
            serde_json::to_string(&status).unwrap(),
            "\"time_limit_exceeded\""
        );
    }
}
