//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use eventhub_api::error::{panic_response, AppError, InternalErrorDetail};
use eventhub_core::error::CoreError;
use axum::body::Body;
use axum::http::Request;
use axum::routing::get;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn validation_error_returns_400() {
    let (status, json) =
        error_to_response(CoreError::Validation("Invalid email format".into()).into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        serde_json::json!({
            "success": false,
            "error": { "code": "VALIDATION_ERROR", "message": "Invalid email format" },
        })
    );
}

#[tokio::test]
async fn bad_request_maps_to_validation_code() {
    let (status, json) = error_to_response(AppError::BadRequest("bad json".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "bad json");
}

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let (status, json) =
        error_to_response(CoreError::Unauthorized("Token required".into()).into()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Token required");
}

#[tokio::test]
async fn forbidden_error_returns_403() {
    let (status, json) = error_to_response(
        CoreError::Forbidden("Not allowed to access this resource".into()).into(),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let (status, json) = error_to_response(CoreError::not_found("Event", "evt-123").into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Event with id 'evt-123' not found");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let (status, json) =
        error_to_response(CoreError::Conflict("Email already registered".into()).into()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert_eq!(json["error"]["message"], "Email already registered");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let (status, json) =
        error_to_response(AppError::InternalError("secret detail leaked".into())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "An unexpected error occurred");
    assert!(!json.to_string().contains("secret"));
}

#[tokio::test]
async fn core_internal_error_is_also_sanitized() {
    let (status, json) = error_to_response(CoreError::Internal("lock poisoned".into()).into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "An unexpected error occurred");
}

#[test]
fn internal_error_detail_is_attached_for_logging() {
    let response = AppError::InternalError("boom".into()).into_response();
    let detail = response
        .extensions()
        .get::<InternalErrorDetail>()
        .expect("internal errors carry their detail");
    assert!(detail.0.contains("boom"));

    let response = AppError::BadRequest("nope".into()).into_response();
    assert!(response.extensions().get::<InternalErrorDetail>().is_none());
}

async fn exploding_handler() -> &'static str {
    panic!("kaboom")
}

#[tokio::test]
async fn panic_in_handler_returns_internal_error_envelope() {
    let app = Router::new()
        .route("/boom", get(exploding_handler))
        .layer(CatchPanicLayer::custom(panic_response));

    let response = app
        .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let detail = response
        .extensions()
        .get::<InternalErrorDetail>()
        .cloned()
        .expect("panic detail is kept for logging");
    assert!(detail.0.contains("kaboom"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "success": false,
            "error": { "code": "INTERNAL_ERROR", "message": "An unexpected error occurred" },
        })
    );
}
