//! Bearer-token authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use eventhub_core::error::CoreError;
use eventhub_core::store::CredentialStore;
use eventhub_core::user::User;

use crate::auth::jwt::{verify_token, JwtConfig};
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated principal, resolved from a `Bearer` token in the
/// `Authorization` header and re-loaded from the credential store.
///
/// ```ignore
/// async fn my_handler(AuthUser(user): AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

/// Resolve an `Authorization` header value to a live user.
///
/// Every failure is [`CoreError::Unauthorized`]:
/// - missing header or not of the form `Bearer <token>` -> `Token required`
/// - bad signature, malformed claims, or expired -> `Invalid or expired token`
/// - subject no longer exists -> `User not found`
pub async fn authenticate(
    header: Option<&str>,
    users: &CredentialStore,
    jwt: &JwtConfig,
) -> Result<User, CoreError> {
    let token = header
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or_else(|| CoreError::Unauthorized("Token required".into()))?;

    let claims = verify_token(token, jwt)
        .map_err(|_| CoreError::Unauthorized("Invalid or expired token".into()))?;

    users
        .get_by_id(&claims.sub)
        .await
        .ok_or_else(|| CoreError::Unauthorized("User not found".into()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let user = authenticate(header, &state.stores.users, &state.config.jwt).await?;
        Ok(AuthUser(user))
    }
}
