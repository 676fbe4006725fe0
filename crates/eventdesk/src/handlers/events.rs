//! Event CRUD and registration handlers.
//!
//! These handlers use the event repository trait object for data access.
//! Cache invalidation is handled by the cached repository decorator, so
//! every write below goes through the repository even when the data
//! source itself does not retain submissions.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use eventdesk_core::events::Event;
use eventdesk_core::storage::RepositoryError;

use crate::{
    handlers::AppError,
    models::{RegisterAttendee, UpdateEvent},
    state::AppState,
};

fn event_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Event not found" })),
    )
        .into_response()
}

/// Extracts whatever events the payload carries, without rejecting
/// payloads that carry none.
///
/// Submissions are acknowledged rather than validated, so a body that is
/// a single event, an array of events, or neither all pass through. The
/// parsed events only feed the repository write that triggers cache
/// invalidation.
fn parse_events_lenient(value: &serde_json::Value) -> Vec<Event> {
    if let Ok(events) = serde_json::from_value::<Vec<Event>>(value.clone()) {
        return events;
    }
    if let Ok(event) = serde_json::from_value::<Event>(value.clone()) {
        return vec![event];
    }
    Vec::new()
}

// ============================================================================
// List Events
// ============================================================================

/// List all events (GET /events).
///
/// Served from the cache when warm; otherwise read through to the data
/// source and repopulated.
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    let events = state.event_repo.list_events().await?;
    Ok(Json(events))
}

// ============================================================================
// Create Event
// ============================================================================

/// Create an event (POST /events).
///
/// Echoes the submitted body back verbatim. The write is recorded at the
/// repository so the listing cache is invalidated.
pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, AppError> {
    let events = parse_events_lenient(&payload);
    state.event_repo.create_events(&events).await?;

    Ok(Json(payload))
}

/// Create events in bulk (POST /events/batch).
///
/// Rejects non-array bodies with 400; otherwise echoes the array back.
pub async fn create_events_batch(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Response, AppError> {
    if !payload.is_array() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Request body must be an array of events." })),
        )
            .into_response());
    }

    let events = parse_events_lenient(&payload);
    state.event_repo.create_events(&events).await?;

    Ok(Json(payload).into_response())
}

// ============================================================================
// Get Event
// ============================================================================

/// Get a single event by id (GET /events/{id}).
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    match state.event_repo.get_event(id).await? {
        Some(event) => Ok(Json(event).into_response()),
        None => Ok(event_not_found()),
    }
}

// ============================================================================
// Update Event
// ============================================================================

/// Update an event (PUT /events/{id}).
///
/// The path id always wins over any id in the body. Returns the updated
/// event on success.
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateEvent>,
) -> Result<Response, AppError> {
    let event = payload.into_event(id);

    match state.event_repo.update_event(&event).await {
        Ok(()) => Ok(Json(event).into_response()),
        Err(RepositoryError::NotFound { .. }) => Ok(event_not_found()),
        Err(err) => Err(err.into()),
    }
}

// ============================================================================
// Delete Event
// ============================================================================

/// Delete an event (DELETE /events/{id}).
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    match state.event_repo.delete_event(id).await {
        Ok(()) => Ok(Json(json!({ "message": "Event deleted successfully" })).into_response()),
        Err(RepositoryError::NotFound { .. }) => Ok(event_not_found()),
        Err(err) => Err(err.into()),
    }
}

// ============================================================================
// Register Attendee
// ============================================================================

/// Register an attendee for an event (POST /events/{id}/register).
///
/// Requires both a name and an email; the target event must exist.
pub async fn register_for_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<RegisterAttendee>,
) -> Result<Response, AppError> {
    if !payload.is_complete() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Missing arguments" })),
        )
            .into_response());
    }

    if state.event_repo.get_event(id).await?.is_none() {
        return Ok(event_not_found());
    }

    tracing::info!(event_id = id, attendee = %payload.name, "Attendee registered");

    Ok(Json(json!({ "message": "Successfully registered to the event" })).into_response())
}
