// Event CRUD HTTP routes

use axum::{
    extract::{Path, State},
    http::{header, HeaderName, StatusCode},
    routing::get,
    Json, Router,
};
use calendar_contracts::{CreateEventRequest, Event};
use calendar_storage::Database;
use serde::Serialize;
use std::sync::Arc;

use crate::services::{CreateEventError, EventService};

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            service: Arc::new(EventService::new(db)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

/// Create event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route("/api/events/:date", get(get_event).delete(delete_event))
        .with_state(state)
}

/// GET /api/events - List all events in insertion order
#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List of events", body = Vec<Event>),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<Event>>, (StatusCode, Json<ErrorResponse>)> {
    let events = state.service.list().await.map_err(|e| {
        tracing::error!("Failed to list events: {}", e);
        internal_error()
    })?;

    Ok(Json(events))
}

/// GET /api/events/{date} - Get the event stored for a date
#[utoipa::path(
    get,
    path = "/api/events/{date}",
    params(
        ("date" = String, Path, description = "Event date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 404, description = "No event for this date"),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<Event>, (StatusCode, Json<ErrorResponse>)> {
    let event = state
        .service
        .get(&date)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get event: {}", e);
            internal_error()
        })?
        .ok_or_else(not_found)?;

    Ok(Json(event))
}

/// POST /api/events - Create a new event
#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = Event,
            headers(("Location" = String, description = "URL of the created event"))),
        (status = 400, description = "Missing date or holidayType"),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Event>), (StatusCode, Json<ErrorResponse>)>
{
    let event = state.service.create(req).await.map_err(|e| match e {
        CreateEventError::MissingFields => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        ),
        CreateEventError::Storage(e) => {
            tracing::error!("Failed to create event: {}", e);
            internal_error()
        }
    })?;

    let location = format!("/api/events/{}", event.date);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(event),
    ))
}

/// DELETE /api/events/{date} - Delete the event stored for a date
#[utoipa::path(
    delete,
    path = "/api/events/{date}",
    params(
        ("date" = String, Path, description = "Event date (YYYY-MM-DD)")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 404, description = "No event for this date"),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let deleted = state.service.delete(&date).await.map_err(|e| {
        tracing::error!("Failed to delete event: {}", e);
        internal_error()
    })?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found())
    }
}

fn internal_error() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Internal server error".to_string(),
        }),
    )
}

fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Event not found".to_string(),
        }),
    )
}
