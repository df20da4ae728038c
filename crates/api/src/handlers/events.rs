//! Handlers for the `/events` resource, including participant registration.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use eventhub_core::event::{Event, EventUpdate, NewEvent};
use eventhub_core::validation::{validate_event_update, validate_new_event};
use eventhub_notify::dispatch;
use serde::{Deserialize, Deserializer};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{EventOwner, RequireOrganizer};
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /events`.
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

/// Request body for `PUT /events/{id}`.
///
/// The outer `Option` records whether the key was present at all, so an
/// explicit `null` is distinguishable from an omitted field.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateEventRequest {
    #[serde(default, deserialize_with = "present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub date: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub time: Option<Option<String>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl UpdateEventRequest {
    /// Trim present values; an explicit `null` becomes the empty string.
    fn into_update(self) -> EventUpdate {
        let field = |value: Option<Option<String>>| {
            value.map(|v| v.map(|s| s.trim().to_string()).unwrap_or_default())
        };
        EventUpdate {
            title: field(self.title),
            description: field(self.description),
            date: field(self.date),
            time: field(self.time),
        }
    }
}

// ---------------------------------------------------------------------------
// Public reads
// ---------------------------------------------------------------------------

/// GET /events
pub async fn list_events(State(state): State<AppState>) -> Json<ApiResponse<Vec<Event>>> {
    Json(ApiResponse::ok(state.stores.events.get_all().await))
}

/// GET /events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<ApiResponse<Event>>> {
    let Path(id) = path?;
    let event = state.stores.events.get_by_id_or_fail(&id).await?;
    Ok(Json(ApiResponse::ok(event)))
}

// ---------------------------------------------------------------------------
// Organizer operations
// ---------------------------------------------------------------------------

/// POST /events (organizer only)
pub async fn create_event(
    RequireOrganizer(AuthUser(organizer)): RequireOrganizer,
    State(state): State<AppState>,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<Event>>)> {
    let Json(input) = payload?;
    let title = input.title.trim();
    let date = input.date.trim();
    let time = input.time.trim();
    validate_new_event(title, date, time)?;

    let event = state
        .stores
        .events
        .create(NewEvent {
            title: title.to_string(),
            description: input.description.map(|d| d.trim().to_string()),
            date: date.to_string(),
            time: time.to_string(),
            organizer_id: organizer.id.clone(),
        })
        .await;

    tracing::info!(event_id = %event.id, organizer_id = %organizer.id, "Event created");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(event))))
}

/// PUT /events/{id} (owner only)
pub async fn update_event(
    EventOwner { event, .. }: EventOwner,
    State(state): State<AppState>,
    payload: Result<Json<UpdateEventRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<Event>>> {
    let Json(input) = payload?;
    let changes = input.into_update();
    validate_event_update(&changes)?;

    let updated = state.stores.events.update(&event.id, changes).await?;

    tracing::info!(event_id = %updated.id, "Event updated");

    Ok(Json(ApiResponse::ok(updated)))
}

/// DELETE /events/{id} (owner only)
pub async fn delete_event(
    EventOwner { event, .. }: EventOwner,
    State(state): State<AppState>,
) -> AppResult<StatusCode> {
    state.stores.events.remove(&event.id).await?;

    tracing::info!(event_id = %event.id, "Event deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Registration workflow
// ---------------------------------------------------------------------------

/// POST /events/{id}/register
///
/// Register the principal as a participant. A repeat registration is rejected
/// with 409 and leaves the event unchanged. The confirmation email is sent on a
/// detached task; its outcome never affects the response.
pub async fn register_for_event(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<Event>>)> {
    let Path(event_id) = path?;

    let updated = state
        .stores
        .events
        .register_participant(&event_id, &user.id)
        .await?;

    tracing::info!(event_id = %updated.id, user_id = %user.id, "User registered for event");

    dispatch(state.notifier.clone(), user.email, updated.clone());

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(updated))))
}
