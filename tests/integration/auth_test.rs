//! Integration tests for registration, login, and bearer authentication.

mod helpers;

use chrono::{Duration, Utc};
use http::StatusCode;

use notehub_auth::jwt::TokenCodec;
use notehub_core::types::UserId;
use notehub_database::store::UserStore;

#[tokio::test]
async fn test_register_returns_token_and_user() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "ada@example.com",
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(response.body["user"]["email"], "ada@example.com");
    assert_eq!(response.body["user"]["name"], "ada");
    assert!(response.body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_stores_verifiable_hash() {
    let app = helpers::TestApp::new();
    app.register("a@x.com", "secret1").await;

    let creds = app
        .state
        .stores
        .users
        .find_user_by_email("a@x.com")
        .await
        .unwrap()
        .unwrap();
    assert_ne!(creds.password_hash, "secret1");
    assert!(creds.password_hash.starts_with("$argon2id$"));

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": "a@x.com", "password": "secret1" })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = helpers::TestApp::new();
    app.register("dup@x.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({ "email": "dup@x.com", "password": "secret2" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "User already exists");

    // The first password still works; the second was never stored.
    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": "dup@x.com", "password": "secret2" })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_validation() {
    let app = helpers::TestApp::new();

    let cases = [
        serde_json::json!({ "password": "secret1" }),
        serde_json::json!({ "email": "a@x.com" }),
        serde_json::json!({ "email": "a@x.com", "password": "12345" }),
        serde_json::json!({ "email": "not-an-email", "password": "secret1" }),
    ];
    for body in cases {
        let response = app
            .request("POST", "/api/auth/register", Some(body.clone()), None)
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {body}");
        assert!(response.body["message"].is_string());
    }

    let malformed = app.request("POST", "/api/auth/register", None, None).await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = helpers::TestApp::new();
    app.register("user@x.com", "secret1").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": "user@x.com", "password": "wrong!" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": "nobody@x.com", "password": "secret1" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
    assert_eq!(wrong_password.body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_me_with_token() {
    let app = helpers::TestApp::new();
    let (token, id) = app.register("me@x.com", "secret1").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["id"], id);
    assert_eq!(response.body["user"]["email"], "me@x.com");
}

#[tokio::test]
async fn test_missing_or_malformed_authorization() {
    let app = helpers::TestApp::new();
    let (token, _) = app.register("h@x.com", "secret1").await;

    let missing = app.request("GET", "/api/notes", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.body["message"], "Unauthorized");

    let wrong_scheme = app
        .request_with_auth("GET", "/api/notes", None, Some(&format!("Token {token}")))
        .await;
    assert_eq!(wrong_scheme.status, StatusCode::UNAUTHORIZED);

    let empty = app
        .request_with_auth("GET", "/api/notes", None, Some("Bearer "))
        .await;
    assert_eq!(empty.status, StatusCode::UNAUTHORIZED);

    let lowercase = app
        .request_with_auth("GET", "/api/notes", None, Some(&format!("bearer {token}")))
        .await;
    assert_eq!(lowercase.status, StatusCode::OK);
}

#[tokio::test]
async fn test_expired_and_foreign_tokens_rejected() {
    let app = helpers::TestApp::new();
    let (_, id) = app.register("t@x.com", "secret1").await;

    let expired = app
        .state
        .codec
        .issue_at(UserId(id), "t@x.com", Utc::now() - Duration::days(8))
        .unwrap();
    let response = app
        .request("GET", "/api/auth/me", None, Some(&expired.token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let other_codec = TokenCodec::new(&notehub_core::config::AuthConfig {
        jwt_secret: "a-completely-different-secret-0123456789".to_string(),
        ..notehub_core::config::AuthConfig::default()
    })
    .unwrap();
    let forged = other_codec.issue(UserId(id), "t@x.com").unwrap();
    let response = app
        .request("GET", "/api/auth/me", None, Some(&forged.token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
