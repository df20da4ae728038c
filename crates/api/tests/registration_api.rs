//! HTTP-level integration tests for the event registration workflow.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_auth, post_json_auth, send};

#[tokio::test]
async fn register_for_event_returns_201_and_notifies() {
    let t = build_test_app();
    let (user, token) = t.user_with_token("user@test.com", "attendee").await;
    let event = t.create_event("Meetup", "other-id").await;

    let response = post_auth(t.app(), &format!("/events/{}/register", event.id), &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["participantIds"], serde_json::json!([user.id]));

    assert_eq!(t.notifier.wait_for(1).await, 1);
    let sent = t.notifier.sent.lock().await;
    assert_eq!(sent[0].0, "user@test.com");
    assert_eq!(sent[0].1.id, event.id);
    assert_eq!(sent[0].1.title, "Meetup");
}

#[tokio::test]
async fn repeat_registration_returns_409_without_second_notification() {
    let t = build_test_app();
    let (user, token) = t.user_with_token("user@test.com", "attendee").await;
    let event = t.create_event("Meetup", "other-id").await;
    let uri = format!("/events/{}/register", event.id);

    let first = post_auth(t.app(), &uri, &token).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(t.notifier.wait_for(1).await, 1);
    let after_first = t.stores.events.get_by_id(&event.id).await.unwrap();

    let second = post_auth(t.app(), &uri, &token).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let json = body_json(second).await;
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert_eq!(json["error"]["message"], "Already registered for this event");

    let after_second = t.stores.events.get_by_id(&event.id).await.unwrap();
    assert_eq!(after_second.participant_ids, vec![user.id]);
    assert_eq!(after_second.updated_at, after_first.updated_at);

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert_eq!(t.notifier.sent.lock().await.len(), 1);
}

#[tokio::test]
async fn register_for_missing_event_returns_404() {
    let t = build_test_app();
    let (_user, token) = t.user_with_token("user@test.com", "attendee").await;

    let response = post_auth(t.app(), "/events/non-existent-id/register", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    assert!(t.notifier.sent.lock().await.is_empty());
}

#[tokio::test]
async fn register_without_token_returns_401() {
    let t = build_test_app();
    let event = t.create_event("E", "u1").await;

    let response = send(
        t.app(),
        axum::http::Request::builder()
            .method("POST")
            .uri(format!("/events/{}/register", event.id))
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(t.notifier.sent.lock().await.is_empty());
}

#[tokio::test]
async fn organizer_flow_end_to_end() {
    let t = build_test_app();
    let (_organizer, org_token) = t.user_with_token("org@test.com", "organizer").await;
    let (attendee, att_token) = t.user_with_token("att@test.com", "attendee").await;

    let body = serde_json::json!({ "title": "Launch", "date": "2025-09-01", "time": "18:00" });
    let response = post_json_auth(t.app(), "/events", body, &org_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let event_id = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let uri = format!("/events/{event_id}/register");
    let response = post_auth(t.app(), &uri, &att_token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(get(t.app(), &format!("/events/{event_id}")).await).await;
    let participants = json["data"]["participantIds"].as_array().unwrap();
    assert!(participants.contains(&serde_json::json!(attendee.id)));

    let response = post_auth(t.app(), &uri, &att_token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn concurrent_repeat_registrations_admit_exactly_one() {
    let t = build_test_app();
    let (user, token) = t.user_with_token("user@test.com", "attendee").await;
    let event = t.create_event("Meetup", "other-id").await;
    let uri = format!("/events/{}/register", event.id);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let app = t.app();
            let uri = uri.clone();
            let token = token.clone();
            tokio::spawn(async move { post_auth(app, &uri, &token).await.status() })
        })
        .collect();

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }
    assert_eq!(
        statuses.iter().filter(|s| **s == StatusCode::CREATED).count(),
        1
    );
    assert!(statuses
        .iter()
        .all(|s| *s == StatusCode::CREATED || *s == StatusCode::CONFLICT));

    assert_eq!(t.notifier.wait_for(1).await, 1);
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert_eq!(t.notifier.sent.lock().await.len(), 1);
    assert_eq!(
        t.stores.events.get_by_id(&event.id).await.unwrap().participant_ids,
        vec![user.id]
    );
}
