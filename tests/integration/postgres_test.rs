//! PostgreSQL repository tests.
//!
//! These run only when `NOTEHUB_TEST_DATABASE_URL` points at a disposable
//! database; otherwise each test returns early.

mod helpers;

use http::StatusCode;

use notehub_core::config::{DatabaseBackend, DatabaseConfig};
use notehub_core::error::ErrorKind;
use notehub_core::types::PageRequest;
use notehub_database::{DatabasePool, Stores};
use notehub_entity::note::{NewNote, NotePatch};
use notehub_entity::user::CreateUser;

async fn connect() -> Option<Stores> {
    let url = std::env::var("NOTEHUB_TEST_DATABASE_URL").ok()?;
    let config = DatabaseConfig {
        backend: DatabaseBackend::Postgres,
        url,
        max_connections: 2,
        ..DatabaseConfig::default()
    };

    let pool = DatabasePool::open(&config)
        .await
        .expect("Failed to open test database");

    sqlx::query("TRUNCATE notes, users RESTART IDENTITY CASCADE")
        .execute(pool.pool())
        .await
        .expect("Failed to clean database");

    Some(Stores::postgres(pool))
}

fn user(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=1024,t=1,p=1$c2FsdHNhbHQ$aGFzaA".to_string(),
        name: None,
    }
}

// One test so the repository and router checks never race on the same tables.
#[tokio::test]
async fn test_postgres_store() {
    let Some(stores) = connect().await else {
        eprintln!("NOTEHUB_TEST_DATABASE_URL not set; skipping");
        return;
    };

    let pool = stores.pool.clone().unwrap();
    assert!(pool.migrate().await.unwrap().is_empty());
    assert!(pool.is_ready().await);

    repository_semantics(&stores).await;

    sqlx::query("TRUNCATE notes, users RESTART IDENTITY CASCADE")
        .execute(stores.pool.as_ref().unwrap().pool())
        .await
        .unwrap();

    router_over_postgres(stores).await;
}

async fn repository_semantics(stores: &Stores) {
    let a = stores.users.create_user(&user("a@x.com")).await.unwrap();
    let b = stores.users.create_user(&user("b@x.com")).await.unwrap();

    let err = stores.users.create_user(&user("a@x.com")).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);

    let found = stores.users.find_user_by_id(a.id).await.unwrap().unwrap();
    assert_eq!(found.email, "a@x.com");

    let note = stores
        .notes
        .create_note(
            a.id,
            &NewNote {
                title: "T".to_string(),
                content: Some("C".to_string()),
                ..NewNote::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(note.note_type, "manual");

    assert!(stores.notes.get_note(note.id, b.id).await.unwrap().is_none());
    assert!(!stores.notes.delete_note(note.id, b.id).await.unwrap());

    let patch = NotePatch {
        summary: Some(Some("x".to_string())),
        ..NotePatch::default()
    };
    assert!(stores.notes.update_note(note.id, b.id, &patch).await.unwrap().is_none());

    let updated = stores
        .notes
        .update_note(note.id, a.id, &patch)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "T");
    assert_eq!(updated.content.as_deref(), Some("C"));
    assert_eq!(updated.summary.as_deref(), Some("x"));
    assert!(updated.updated_at >= note.updated_at);

    let clear = NotePatch {
        content: Some(None),
        ..NotePatch::default()
    };
    let cleared = stores
        .notes
        .update_note(note.id, a.id, &clear)
        .await
        .unwrap()
        .unwrap();
    assert!(cleared.content.is_none());
    assert_eq!(cleared.summary.as_deref(), Some("x"));

    let second = stores
        .notes
        .create_note(
            a.id,
            &NewNote {
                title: "T2".to_string(),
                content: Some("C".to_string()),
                ..NewNote::default()
            },
        )
        .await
        .unwrap();
    let listed = stores
        .notes
        .list_notes(a.id, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(stores.notes.count_notes(a.id).await.unwrap(), 2);
    assert_eq!(stores.notes.count_notes(b.id).await.unwrap(), 0);

    assert!(stores.notes.delete_note(note.id, a.id).await.unwrap());

    // Removing a user takes their notes with them.
    let pool = stores.pool.as_ref().unwrap().pool();
    let deleted = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(a.id.0)
        .execute(pool)
        .await
        .unwrap();
    assert_eq!(deleted.rows_affected(), 1);
    assert_eq!(stores.notes.count_notes(a.id).await.unwrap(), 0);
    assert!(stores.notes.get_note(second.id, a.id).await.unwrap().is_none());
}

async fn router_over_postgres(stores: Stores) {
    let app = helpers::TestApp::with_stores(stores);
    let (token, _) = app.register("pg@x.com", "secret1").await;
    let id = app.create_note(&token, "T", "C").await;

    let response = app
        .request("GET", &format!("/api/notes/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let health = app.request("GET", "/api/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);

    helpers::assert_column_limits_rejected(&app, &token, id).await;
}
