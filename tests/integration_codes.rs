mod common;

use axum::http::{StatusCode, header};

use common::{BASE_URL, body_json, body_string, get, setup_test_app, setup_test_app_with_organizers};

#[tokio::test]
async fn test_generate_code_returns_svg_and_url() {
    let app = setup_test_app();

    let response = app
        .send(get("/generateCode/CS101", Some("organizer@x.com")))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/svg+xml"
    );
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );

    let qr_content = response
        .headers()
        .get("QR-Content")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let prefix = format!("{}/entrypoint/", BASE_URL);
    assert!(qr_content.starts_with(&prefix));

    let svg = body_string(response).await;
    assert!(svg.contains("<svg"));

    let token = qr_content.strip_prefix(&prefix).unwrap();
    assert_eq!(app.tokens.verify(token).await.unwrap().class_id, "CS101");
}

#[tokio::test]
async fn test_scanned_code_checks_in() {
    let app = setup_test_app();

    let response = app
        .send(get("/generateCode/CS101", Some("organizer@x.com")))
        .await;
    let qr_content = response
        .headers()
        .get("QR-Content")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let path = qr_content.strip_prefix(BASE_URL).unwrap();

    let response = app.send(get(path, Some("a@x.com"))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(app.store.get("CS101", "a@x.com").await.is_some());
}

#[tokio::test]
async fn test_checkin_code_json() {
    let app = setup_test_app();

    let response = app
        .send(get("/api/classes/CS101/code", Some("organizer@x.com")))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["expiresIn"], 300);
    assert!(
        body["url"]
            .as_str()
            .unwrap()
            .starts_with("http://localhost:3000/entrypoint/")
    );
}

#[tokio::test]
async fn test_codes_are_limited_to_organizers() {
    let app = setup_test_app_with_organizers(&["organizer@x.com"]);

    let response = app
        .send(get("/generateCode/CS101", Some("student@x.com")))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .send(get("/api/classes/CS101/code", Some("student@x.com")))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_generate_code_without_session_redirects_to_login() {
    let app = setup_test_app();

    let response = app.send(get("/generateCode/CS101", None)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_intro_page_and_health() {
    let app = setup_test_app();

    let response = app.send(get("/", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    assert!(page.contains(r#"action="/registerPage""#));

    let response = app.send(get("/health", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}
