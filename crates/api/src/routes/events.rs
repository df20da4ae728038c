//! Route definitions for the `/events` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET    /                -> list_events
/// POST   /                -> create_event        (organizer)
/// GET    /{id}            -> get_event
/// PUT    /{id}            -> update_event        (owner)
/// DELETE /{id}            -> delete_event        (owner)
/// POST   /{id}/register   -> register_for_event  (authenticated)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list_events).post(events::create_event))
        .route(
            "/{id}",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .route("/{id}/register", post(events::register_for_event))
}
