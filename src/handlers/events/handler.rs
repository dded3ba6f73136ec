//! Event handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::roles,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    state::AppState,
};

use super::{
    request::{CreateEventRequest, UpcomingEventsQuery},
    response::{EventResponse, EventSummary, EventsListResponse},
};

/// List upcoming published events, soonest first
pub async fn list_upcoming(
    State(state): State<AppState>,
    Query(query): Query<UpcomingEventsQuery>,
) -> AppResult<Json<EventsListResponse>> {
    let events = state.events().list_upcoming(query.limit).await?;

    let now = Utc::now();
    let events: Vec<EventSummary> = events
        .iter()
        .map(|e| EventSummary::from_event(e, now))
        .collect();

    let count = events.len();
    Ok(Json(EventsListResponse { events, count }))
}

/// List live published events
pub async fn list_live(State(state): State<AppState>) -> AppResult<Json<EventsListResponse>> {
    let events = state.events().list_live().await?;

    let now = Utc::now();
    let events: Vec<EventSummary> = events
        .iter()
        .map(|e| EventSummary::from_event(e, now))
        .collect();

    let count = events.len();
    Ok(Json(EventsListResponse { events, count }))
}

/// Get a specific event
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EventResponse>> {
    let event = state.events().get_event(&id).await?;
    Ok(Json(EventResponse::from_event(event, Utc::now())))
}

/// Create a new event
pub async fn create_event(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateEventRequest>,
) -> AppResult<(StatusCode, Json<EventResponse>)> {
    payload.validate()?;

    // Only organizers and admins can create events
    if auth_user.role != roles::ADMIN && auth_user.role != roles::ORGANIZER {
        return Err(AppError::Forbidden(
            "Only organizers can create events".to_string(),
        ));
    }

    let event = state.events().create_event(&auth_user.id, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(EventResponse::from_event(event, Utc::now())),
    ))
}

/// Register the authenticated user for an event
pub async fn register_for_event(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EventResponse>> {
    let event = state.events().register_user(&id, &auth_user.id).await?;
    Ok(Json(EventResponse::from_event(event, Utc::now())))
}

/// Unregister the authenticated user from an event
pub async fn unregister_from_event(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EventResponse>> {
    let event = state.events().unregister_user(&id, &auth_user.id).await?;
    Ok(Json(EventResponse::from_event(event, Utc::now())))
}
