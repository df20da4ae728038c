//! Role- and ownership-based access control extractors.
//!
//! Each extractor runs [`AuthUser`] first, so an unauthenticated request is
//! always rejected with 401 before any authorization decision is made.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use eventhub_core::event::Event;
use eventhub_core::policy::{require_owner, require_role};
use eventhub_core::roles::Role;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `organizer` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn organizers_only(RequireOrganizer(user): RequireOrganizer) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireOrganizer(pub AuthUser);

impl FromRequestParts<AppState> for RequireOrganizer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        require_role(&user.0, Role::Organizer)?;
        Ok(RequireOrganizer(user))
    }
}

/// Requires the principal to organize the event named by the `{id}` path
/// segment.
///
/// The event is loaded before the ownership comparison, so a missing event
/// reports 404 rather than 403.
pub struct EventOwner {
    pub user: AuthUser,
    pub event: Event,
}

impl FromRequestParts<AppState> for EventOwner {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        let Path(event_id) = Path::<String>::from_request_parts(parts, state).await?;

        let event = state.stores.events.get_by_id_or_fail(&event_id).await?;
        require_owner(&user.0, &event)?;

        Ok(EventOwner { user, event })
    }
}
