#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use eventhub_api::auth::jwt::JwtConfig;
use eventhub_api::auth::password::hash_password;
use eventhub_api::config::{RunMode, ServerConfig};
use eventhub_api::router::build_app_router;
use eventhub_api::state::AppState;
use eventhub_core::event::{Event, NewEvent};
use eventhub_core::store::Stores;
use eventhub_core::user::{NewUser, User};
use eventhub_notify::{Notifier, NotifyError};
use http_body_util::BodyExt;
use tokio::sync::Mutex;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        mode: RunMode::Test,
        jwt: JwtConfig::new(TEST_SECRET),
    }
}

/// Notifier that records every registration instead of sending email.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(String, Event)>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_registration(&self, to_email: &str, event: &Event) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .await
            .push((to_email.to_string(), event.clone()));
        Ok(())
    }
}

impl RecordingNotifier {
    /// Wait (bounded) until at least `count` notifications were recorded,
    /// then return how many there are.
    pub async fn wait_for(&self, count: usize) -> usize {
        for _ in 0..100 {
            let len = self.sent.lock().await.len();
            if len >= count {
                return len;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        self.sent.lock().await.len()
    }
}

/// Everything a test needs: the router plus direct handles on the state.
pub struct TestApp {
    pub router: Router,
    pub stores: Stores,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestApp {
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    /// Insert a user directly into the store with a hashed password.
    pub async fn create_user(&self, email: &str, password: &str, role: &str) -> User {
        self.stores
            .users
            .create(NewUser {
                email: email.to_string(),
                password_hash: hash_password(password).expect("hashing should succeed"),
                name: "Test User".to_string(),
                role: Some(role.to_string()),
            })
            .await
            .expect("user creation should succeed")
    }

    /// Insert an event directly into the store.
    pub async fn create_event(&self, title: &str, organizer_id: &str) -> Event {
        self.stores
            .events
            .create(NewEvent {
                title: title.to_string(),
                description: Some("About".to_string()),
                date: "2025-06-15".to_string(),
                time: "09:00".to_string(),
                organizer_id: organizer_id.to_string(),
            })
            .await
    }

    /// Log in through the API and return the token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = serde_json::json!({ "email": email, "password": password });
        let response = post_json(self.app(), "/login", body).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        json["data"]["token"]
            .as_str()
            .expect("login must return a token")
            .to_string()
    }

    /// Create a user and log them in. Returns the user and a token.
    pub async fn user_with_token(&self, email: &str, role: &str) -> (User, String) {
        let user = self.create_user(email, "password1", role).await;
        let token = self.login(email, "password1").await;
        (user, token)
    }
}

/// Build the full application router with a recording notifier.
pub fn build_test_app() -> TestApp {
    let stores = Stores::new();
    let notifier = Arc::new(RecordingNotifier::default());

    let state = AppState {
        stores: stores.clone(),
        config: Arc::new(test_config()),
        notifier: notifier.clone(),
    };

    TestApp {
        router: build_app_router(state),
        stores,
        notifier,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<serde_json::Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, request(Method::GET, uri, None, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request(Method::GET, uri, Some(token), None)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, request(Method::POST, uri, None, Some(body))).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, request(Method::POST, uri, Some(token), Some(body))).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request(Method::POST, uri, Some(token), None)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, request(Method::PUT, uri, Some(token), Some(body))).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, request(Method::DELETE, uri, Some(token), None)).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
