//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

// =============================================================================
// EVENT SETTINGS
// =============================================================================

/// Assumed event duration in hours (the `live` window after `date`)
pub const EVENT_DURATION_HOURS: i64 = 3;

/// Default maximum participants per event
pub const DEFAULT_MAX_PARTICIPANTS: u32 = 500;

/// Minimum allowed participant capacity
pub const MIN_MAX_PARTICIPANTS: u32 = 1;

/// Maximum allowed participant capacity
pub const MAX_MAX_PARTICIPANTS: u32 = 10_000;

/// Default limit for the upcoming-events listing
pub const DEFAULT_UPCOMING_LIMIT: i64 = 10;

/// Event title length bounds
pub const MIN_EVENT_TITLE_LENGTH: u64 = 5;
pub const MAX_EVENT_TITLE_LENGTH: u64 = 200;

/// Event description length bounds
pub const MIN_EVENT_DESCRIPTION_LENGTH: u64 = 10;
pub const MAX_EVENT_DESCRIPTION_LENGTH: u64 = 1000;

/// Long description maximum length
pub const MAX_EVENT_LONG_DESCRIPTION_LENGTH: u64 = 5000;

/// Single rule maximum length
pub const MAX_RULE_LENGTH: u64 = 500;

/// Single tag maximum length
pub const MAX_TAG_LENGTH: u64 = 30;

// =============================================================================
// PROBLEM CONSTRAINTS
// =============================================================================

/// Default per-problem time limit in milliseconds
pub const DEFAULT_TIME_LIMIT_MS: u32 = 1000;

/// Minimum per-problem time limit in milliseconds
pub const MIN_TIME_LIMIT_MS: u32 = 100;

/// Default per-problem memory limit in megabytes
pub const DEFAULT_MEMORY_LIMIT_MB: u32 = 256;

/// Minimum per-problem memory limit in megabytes
pub const MIN_MEMORY_LIMIT_MB: u32 = 64;

/// Problem points bounds
pub const MIN_PROBLEM_POINTS: u32 = 1;
pub const MAX_PROBLEM_POINTS: u32 = 1000;

// =============================================================================
// USER ROLES
// =============================================================================

/// Role identifiers carried in JWT claims
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const ORGANIZER: &str = "organizer";
    pub const USER: &str = "user";
}

// =============================================================================
// RATE LIMITS
// =============================================================================

/// Rate limit settings (fixed window, per client IP)
pub mod rate_limits {
    /// Registration endpoints: max requests per window
    pub const REGISTRATION_MAX_REQUESTS: i64 = 10;

    /// Registration endpoints: window in seconds
    pub const REGISTRATION_WINDOW_SECS: i64 = 60;

    /// All other endpoints: max requests per window
    pub const GENERAL_MAX_REQUESTS: i64 = 120;

    /// All other endpoints: window in seconds
    pub const GENERAL_WINDOW_SECS: i64 = 60;
}
