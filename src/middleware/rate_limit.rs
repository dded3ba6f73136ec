//! Rate limiting middleware

use axum::{
    body::Body,
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use redis::AsyncCommands;
use std::net::SocketAddr;

use crate::{constants::rate_limits, error::AppError, state::AppState};

/// Fixed-window rate limit keyed by client IP and endpoint bucket
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let ip = addr.ip().to_string();
    let path = request.uri().path().to_string();

    let bucket = path_bucket(&path);
    let (limit, window) = bucket_limits(bucket);

    let key = format!("rate_limit:{ip}:{bucket}");
    let mut redis = state.redis();

    let count: i64 = redis.incr(&key, 1).await?;
    if count == 1 {
        // Window starts on the first request
        let _: () = redis.expire(&key, window).await?;
    }

    if count > limit {
        return Err(AppError::TooManyRequests);
    }

    Ok(next.run(request).await)
}

/// Group endpoints into rate-limit buckets
fn path_bucket(path: &str) -> &'static str {
    if path.ends_with("/register") || path.ends_with("/unregister") {
        "registration"
    } else {
        "general"
    }
}

/// Limits for a bucket: (max requests, window seconds)
fn bucket_limits(bucket: &str) -> (i64, i64) {
    match bucket {
        "registration" => (
            rate_limits::REGISTRATION_MAX_REQUESTS,
            rate_limits::REGISTRATION_WINDOW_SECS,
        ),
        _ => (
            rate_limits::GENERAL_MAX_REQUESTS,
            rate_limits::GENERAL_WINDOW_SECS,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_endpoints_get_strict_bucket() {
        assert_eq!(path_bucket("/api/v1/events/abc/register"), "registration");
        assert_eq!(path_bucket("/api/v1/events/abc/unregister"), "registration");
        assert_eq!(path_bucket("/api/v1/events/upcoming"), "general");
    }

    #[test]
    fn test_bucket_limits() {
        assert_eq!(bucket_limits("registration").0, rate_limits::REGISTRATION_MAX_REQUESTS);
        assert_eq!(bucket_limits("general").1, rate_limits::GENERAL_WINDOW_SECS);
    }
}
