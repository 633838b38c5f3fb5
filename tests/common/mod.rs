#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use rollcall::router::init_router;
use rollcall::state::AppState;
use rollcall_auth::{
    Identity, SecretCache, SecretSource, StaticSecretSource, TokenService, create_session_token,
};
use rollcall_config::{
    CorsConfig, ServerConfig, SessionConfig, StoreBackend, StoreConfig, TokenConfig,
};
use rollcall_db::InMemoryAttendanceStore;

pub const BASE_URL: &str = "http://localhost:3000";
pub const SIGNING_SECRET: &str = "integration-test-signing-secret";
pub const SESSION_SECRET: &str = "integration-test-session-secret";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryAttendanceStore>,
    pub tokens: TokenService,
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub fn token_config() -> TokenConfig {
    TokenConfig {
        secret_name: "jwt-secret".to_string(),
        secret_field: "jwtSecret".to_string(),
        static_secret: None,
        token_expiry: 300,
    }
}

pub fn session_config(organizers: &[&str]) -> SessionConfig {
    SessionConfig {
        secret: SESSION_SECRET.to_string(),
        cookie_name: "appSession".to_string(),
        login_url: "/login".to_string(),
        organizer_emails: organizers.iter().map(|email| email.to_string()).collect(),
        session_expiry: 3600,
    }
}

pub fn setup_test_app() -> TestApp {
    setup_test_app_with(&[], Arc::new(StaticSecretSource::new(SIGNING_SECRET)))
}

pub fn setup_test_app_with_organizers(organizers: &[&str]) -> TestApp {
    setup_test_app_with(organizers, Arc::new(StaticSecretSource::new(SIGNING_SECRET)))
}

pub fn setup_test_app_with(organizers: &[&str], source: Arc<dyn SecretSource>) -> TestApp {
    let store = Arc::new(InMemoryAttendanceStore::new());
    let tokens = TokenService::new(Arc::new(SecretCache::new(source)), token_config());

    let state = AppState {
        store: store.clone(),
        tokens: tokens.clone(),
        server_config: ServerConfig {
            base_url: BASE_URL.to_string(),
            port: 3000,
            roster_refresh_interval: 10,
            app_title: "Simple Attendance System".to_string(),
        },
        store_config: StoreConfig {
            table_name: "attendance".to_string(),
            aws_region: "us-east-1".to_string(),
            retention_seconds: 86400,
            backend: StoreBackend::Memory,
        },
        session_config: session_config(organizers),
        cors_config: CorsConfig {
            allowed_origins: vec![BASE_URL.to_string()],
        },
    };

    TestApp {
        router: init_router(state),
        store,
        tokens,
    }
}

/// `Cookie` header value carrying a session for `email`.
pub fn session_cookie(email: &str) -> String {
    let identity = Identity::new(format!("auth0|{}", email), email).with_name("Test User");
    let token = create_session_token(&identity, SESSION_SECRET, 3600).unwrap();
    format!("appSession={}", token)
}

pub fn get(uri: &str, email: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(email) = email {
        builder = builder.header(header::COOKIE, session_cookie(email));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, body: &'static str, email: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(email) = email {
        builder = builder.header(header::COOKIE, session_cookie(email));
    }
    builder.body(Body::from(body)).unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}
