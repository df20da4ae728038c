pub mod auth;
pub mod events;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /register                  register (public)
/// /login                     login (public)
///
/// /events                    list (public), create (organizer)
/// /events/{id}               get (public), update, delete (owner)
/// /events/{id}/register      register for event (authenticated)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/events", events::router())
}
