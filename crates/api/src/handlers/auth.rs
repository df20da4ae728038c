//! Handlers for account registration and login.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use eventhub_core::error::CoreError;
use eventhub_core::user::{NewUser, PublicUser, User};
use eventhub_core::validation::{validate_login, validate_registration};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::issue_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
    /// Anything other than the string `organizer` registers an attendee,
    /// including values of the wrong JSON type.
    #[serde(default)]
    pub role: Option<serde_json::Value>,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Successful authentication payload returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: PublicUser,
    pub token: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /register
///
/// Create an account and return it with a session token.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ApiResponse<AuthResponse>>)> {
    let Json(input) = payload?;
    let email = input.email.trim();
    let name = input.name.trim();
    validate_registration(email, &input.password, name)?;

    if state.stores.users.get_by_email(email).await.is_some() {
        return Err(CoreError::Conflict("Email already registered".into()).into());
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = state
        .stores
        .users
        .create(NewUser {
            email: email.to_string(),
            password_hash,
            name: name.to_string(),
            role: input
                .role
                .as_ref()
                .and_then(serde_json::Value::as_str)
                .map(str::to_string),
        })
        .await?;

    tracing::info!(user_id = %user.id, role = %user.role, "User registered");

    let response = auth_response(&state, user)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(response))))
}

/// POST /login
///
/// Authenticate with email + password and return a fresh session token.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<AuthResponse>>> {
    let Json(input) = payload?;
    let email = input.email.trim();
    validate_login(email, &input.password)?;

    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let user = state
        .stores
        .users
        .get_by_email(email)
        .await
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid());
    }

    tracing::debug!(user_id = %user.id, "User logged in");

    Ok(Json(ApiResponse::ok(auth_response(&state, user)?)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn auth_response(state: &AppState, user: User) -> AppResult<AuthResponse> {
    let token = issue_token(&user.id, &user.email, user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        user: user.into(),
        token,
    })
}
