//! Integration tests for owner-scoped note CRUD.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_create_and_get_note() {
    let app = helpers::TestApp::new();
    let (token, user_id) = app.register("a@x.com", "secret1").await;

    let response = app
        .request(
            "POST",
            "/api/notes",
            Some(serde_json::json!({
                "title": "Groceries",
                "content": "milk, eggs",
                "noteType": "voice",
                "audioUrl": "https://cdn.example/1.mp3",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Note created");
    let note = &response.body["note"];
    assert_eq!(note["user_id"], user_id);
    assert_eq!(note["note_type"], "voice");
    assert!(note["summary"].is_null());

    let id = note["id"].as_i64().unwrap();
    let fetched = app
        .request("GET", &format!("/api/notes/{id}"), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["note"]["title"], "Groceries");
}

#[tokio::test]
async fn test_create_note_validation() {
    let app = helpers::TestApp::new();
    let (token, _) = app.register("a@x.com", "secret1").await;

    for body in [
        serde_json::json!({ "content": "no title" }),
        serde_json::json!({ "title": "no content" }),
        serde_json::json!({ "title": "", "content": "x" }),
    ] {
        let response = app
            .request("POST", "/api/notes", Some(body), Some(&token))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    let defaulted = app
        .request(
            "POST",
            "/api/notes",
            Some(serde_json::json!({ "title": "T", "content": "C", "summary": "" })),
            Some(&token),
        )
        .await;
    assert_eq!(defaulted.body["note"]["note_type"], "manual");
    assert!(defaulted.body["note"]["summary"].is_null());
}

#[tokio::test]
async fn test_foreign_note_is_not_found() {
    let app = helpers::TestApp::new();
    let (owner, _) = app.register("a@x.com", "secret1").await;
    let (intruder, _) = app.register("b@x.com", "secret1").await;
    let id = app.create_note(&owner, "private", "body").await;
    let path = format!("/api/notes/{id}");

    let get = app.request("GET", &path, None, Some(&intruder)).await;
    assert_eq!(get.status, StatusCode::NOT_FOUND);

    let missing = app
        .request("GET", "/api/notes/999999", None, Some(&intruder))
        .await;
    assert_eq!(get.body, missing.body);

    let update = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "title": "mine now" })),
            Some(&intruder),
        )
        .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);

    let delete = app.request("DELETE", &path, None, Some(&intruder)).await;
    assert_eq!(delete.status, StatusCode::OK);
    assert_eq!(delete.body["message"], "Note deleted");

    let list = app.request("GET", "/api/notes", None, Some(&intruder)).await;
    assert_eq!(list.body["total"], 0);

    let still_there = app.request("GET", &path, None, Some(&owner)).await;
    assert_eq!(still_there.status, StatusCode::OK);
    assert_eq!(still_there.body["note"]["title"], "private");
}

#[tokio::test]
async fn test_over_long_fields_rejected() {
    let app = helpers::TestApp::new();
    let (token, _) = app.register("a@x.com", "secret1").await;
    let id = app.create_note(&token, "T", "C").await;

    helpers::assert_column_limits_rejected(&app, &token, id).await;
}

#[tokio::test]
async fn test_update_empty_note_type_resets_default() {
    let app = helpers::TestApp::new();
    let (token, _) = app.register("a@x.com", "secret1").await;
    let id = app.create_note(&token, "T", "C").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/notes/{id}"),
            Some(serde_json::json!({ "noteType": "" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["note"]["note_type"], "manual");
}

#[tokio::test]
async fn test_malformed_note_id() {
    let app = helpers::TestApp::new();
    let (token, _) = app.register("a@x.com", "secret1").await;

    for path in ["/api/notes/abc", "/api/notes/0", "/api/notes/-1"] {
        let response = app.request("GET", path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "path: {path}");
    }
}

#[tokio::test]
async fn test_partial_update() {
    let app = helpers::TestApp::new();
    let (token, _) = app.register("a@x.com", "secret1").await;
    let id = app.create_note(&token, "T", "C").await;
    let path = format!("/api/notes/{id}");

    let response = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "summary": "x" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Note updated");
    let note = &response.body["note"];
    assert_eq!(note["title"], "T");
    assert_eq!(note["content"], "C");
    assert_eq!(note["summary"], "x");

    let cleared = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "content": null })),
            Some(&token),
        )
        .await;
    assert!(cleared.body["note"]["content"].is_null());
    assert_eq!(cleared.body["note"]["summary"], "x");

    let empty_title = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "title": "" })),
            Some(&token),
        )
        .await;
    assert_eq!(empty_title.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_pagination() {
    let app = helpers::TestApp::new();
    let (token, _) = app.register("a@x.com", "secret1").await;
    let (other, _) = app.register("b@x.com", "secret1").await;
    for i in 0..5 {
        app.create_note(&token, &format!("n{i}"), "C").await;
    }
    app.create_note(&other, "not yours", "C").await;

    let all = app.request("GET", "/api/notes", None, Some(&token)).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body["total"], 5);
    assert_eq!(all.body["limit"], 50);
    assert_eq!(all.body["offset"], 0);
    let titles: Vec<&str> = all.body["notes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["n4", "n3", "n2", "n1", "n0"]);

    let window = app
        .request("GET", "/api/notes?limit=2&offset=1", None, Some(&token))
        .await;
    let titles: Vec<&str> = window.body["notes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["n3", "n2"]);

    let clamped = app
        .request("GET", "/api/notes?limit=1000", None, Some(&token))
        .await;
    assert_eq!(clamped.body["limit"], 100);

    let bad = app
        .request("GET", "/api/notes?limit=lots", None, Some(&token))
        .await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_then_get() {
    let app = helpers::TestApp::new();
    let (token, _) = app.register("a@x.com", "secret1").await;
    let id = app.create_note(&token, "T", "C").await;
    let path = format!("/api/notes/{id}");

    let first = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(first.status, StatusCode::OK);
    let second = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(second.status, StatusCode::OK);

    let get = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(get.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unsupported_method() {
    let app = helpers::TestApp::new();
    let (token, _) = app.register("a@x.com", "secret1").await;

    let response = app
        .request("PATCH", "/api/notes", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}
