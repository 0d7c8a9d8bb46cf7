//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use notehub_core::config::{AppConfig, AuthConfig, DatabaseBackend, DatabaseConfig, PasswordHashConfig};
use notehub_database::{MemoryStore, Stores};

/// Signing secret used by every test app.
pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application state behind the router
    pub state: notehub_api::AppState,
}

/// Configuration with a fixed secret and a cheap hash work factor.
pub fn test_config() -> AppConfig {
    AppConfig {
        auth: AuthConfig {
            jwt_secret: TEST_SECRET.to_string(),
            password_hash: PasswordHashConfig {
                memory_kib: 1024,
                iterations: 1,
                parallelism: 1,
            },
            ..AuthConfig::default()
        },
        database: DatabaseConfig {
            backend: DatabaseBackend::Memory,
            ..DatabaseConfig::default()
        },
        ..AppConfig::default()
    }
}

impl TestApp {
    /// Create a test application over a fresh in-memory store
    pub fn new() -> Self {
        Self::with_stores(Stores::memory(MemoryStore::new()))
    }

    /// Create a test application over the given stores
    pub fn with_stores(stores: Stores) -> Self {
        let state =
            notehub_api::AppState::new(test_config(), stores).expect("Failed to build state");
        let router = notehub_api::build_router(state.clone());
        Self { router, state }
    }

    /// Register a user and return their token and id
    pub async fn register(&self, email: &str, password: &str) -> (String, i64) {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Register failed: {:?}",
            response.body
        );

        let token = response.body["token"]
            .as_str()
            .expect("No token in register response")
            .to_string();
        let id = response.body["user"]["id"]
            .as_i64()
            .expect("No user id in register response");
        (token, id)
    }

    /// Create a note and return its id
    pub async fn create_note(&self, token: &str, title: &str, content: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/notes",
                Some(serde_json::json!({ "title": title, "content": content })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create note failed: {:?}",
            response.body
        );
        response.body["note"]["id"].as_i64().expect("No note id")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let auth = token.map(|t| format!("Bearer {t}"));
        self.request_with_auth(method, path, body, auth.as_deref())
            .await
    }

    /// Make an HTTP request with a raw `Authorization` header value
    pub async fn request_with_auth(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Over-long values for length-limited columns answer 400 and store nothing.
pub async fn assert_column_limits_rejected(app: &TestApp, token: &str, note_id: i64) {
    let long_email = format!("{}@x.com", "a".repeat(300));
    let register = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({ "email": long_email, "password": "secret1" })),
            None,
        )
        .await;
    assert_eq!(register.status, StatusCode::BAD_REQUEST, "{:?}", register.body);

    let long_title = "t".repeat(600);
    let long_type = "v".repeat(60);
    for body in [
        serde_json::json!({ "title": long_title, "content": "C" }),
        serde_json::json!({ "title": "T", "content": "C", "noteType": long_type }),
    ] {
        let response = app
            .request("POST", "/api/notes", Some(body), Some(token))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{:?}", response.body);
    }

    let path = format!("/api/notes/{note_id}");
    for body in [
        serde_json::json!({ "title": long_title }),
        serde_json::json!({ "noteType": long_type }),
    ] {
        let response = app.request("PUT", &path, Some(body), Some(token)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{:?}", response.body);
    }

    let list = app.request("GET", "/api/notes", None, Some(token)).await;
    assert_eq!(list.body["total"], 1);
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
