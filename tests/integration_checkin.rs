mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{Duration, Utc};

use rollcall_auth::{SecretSource, issue_checkin_token};
use common::{body_json, body_string, get, location, setup_test_app, setup_test_app_with};

#[tokio::test]
async fn test_check_in_records_attendance() {
    let app = setup_test_app();
    let token = app
        .tokens
        .issue_at("CS101", Utc::now() - Duration::minutes(1))
        .await
        .unwrap();

    let response = app
        .send(get(&format!("/entrypoint/{}", token), Some("a@x.com")))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Attendance registered successfully."));
    assert!(body.contains("Simple Attendance System"));

    let record = app.store.get("CS101", "a@x.com").await.unwrap();
    assert!(record.attendance);
    let login_info: serde_json::Value = serde_json::from_str(&record.login_info).unwrap();
    assert_eq!(login_info["email"], "a@x.com");
    assert_eq!(login_info["name"], "Test User");

    let response = app
        .send(get("/api/classes/CS101/roster", Some("organizer@x.com")))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let roster = body_json(response).await;
    assert_eq!(roster["classId"], "CS101");
    assert_eq!(roster["count"], 1);
    assert_eq!(roster["entries"][0]["email"], "a@x.com");
    assert_eq!(roster["entries"][0]["attendance"], true);
    assert_eq!(roster["entries"][0]["date"], record.check_in_date.as_str());
}

#[tokio::test]
async fn test_expired_token_is_rejected_without_write() {
    let app = setup_test_app();
    let token = app
        .tokens
        .issue_at("CS101", Utc::now() - Duration::minutes(6))
        .await
        .unwrap();

    let response = app
        .send(get(&format!("/entrypoint/{}", token), Some("a@x.com")))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_string(response).await;
    assert!(body.contains("Invalid token, try to scan the QR code again."));
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_forged_token_is_rejected() {
    let app = setup_test_app();
    let forged =
        issue_checkin_token("CS101", "some-other-secret", &common::token_config()).unwrap();

    let response = app
        .send(get(&format!("/entrypoint/{}", forged), Some("a@x.com")))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_malformed_token_is_rejected() {
    let app = setup_test_app();

    let response = app.send(get("/entrypoint/not-a-token", Some("a@x.com"))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_repeat_check_in_keeps_one_record() {
    let app = setup_test_app();
    let token = app.tokens.issue("CS101").await.unwrap();
    let uri = format!("/entrypoint/{}", token);

    let first = app.send(get(&uri, Some("a@x.com"))).await;
    assert_eq!(first.status(), StatusCode::OK);
    let first_date = app.store.get("CS101", "a@x.com").await.unwrap().check_in_date;

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let second = app.send(get(&uri, Some("a@x.com"))).await;
    assert_eq!(second.status(), StatusCode::OK);

    assert_eq!(app.store.len().await, 1);
    let latest = app.store.get("CS101", "a@x.com").await.unwrap();
    assert!(latest.check_in_date > first_date);
}

#[tokio::test]
async fn test_check_in_without_session_redirects_to_login() {
    let app = setup_test_app();
    let token = app.tokens.issue("CS101").await.unwrap();

    let response = app.send(get(&format!("/entrypoint/{}", token), None)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/login?returnTo=%2Fentrypoint%2F"));
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_check_in_with_invalid_session_redirects_to_login() {
    let app = setup_test_app();
    let token = app.tokens.issue("CS101").await.unwrap();

    let request = Request::builder()
        .uri(format!("/entrypoint/{}", token))
        .header(header::COOKIE, "appSession=garbage")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_check_in_with_bearer_session() {
    let app = setup_test_app();
    let token = app.tokens.issue("CS101").await.unwrap();
    let session = common::session_cookie("b@x.com");
    let session_token = session.strip_prefix("appSession=").unwrap();

    let request = Request::builder()
        .uri(format!("/entrypoint/{}", token))
        .header(header::AUTHORIZATION, format!("Bearer {}", session_token))
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(app.store.get("CS101", "b@x.com").await.is_some());
}

struct UnavailableSecretStore;

#[async_trait]
impl SecretSource for UnavailableSecretStore {
    async fn fetch_secret(&self) -> anyhow::Result<String> {
        Err(anyhow::anyhow!("secret store unreachable"))
    }
}

#[tokio::test]
async fn test_secret_store_failure_is_server_error() {
    let app = setup_test_app_with(&[], Arc::new(UnavailableSecretStore));

    let response = app
        .send(get("/entrypoint/whatever", Some("a@x.com")))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(app.store.is_empty().await);
}
