//! Shared integration test helpers
//!
//! Provides a fully wired test application backed by the in-memory store
//! and a throwaway upload directory, plus helpers for the register/login
//! flow. The test server keeps cookies between requests, so a login in a
//! helper authenticates every later request in the same test.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use tempfile::TempDir;

use inkpost::auth::sessions::TokenService;
use inkpost::routes::create_router;
use inkpost::server::state::AppState;
use inkpost::store::MemoryStore;
use inkpost::users::avatar::AvatarStore;

/// A running test application
pub struct TestApp {
    pub server: TestServer,
    /// Upload directory; deleted when the test ends
    pub uploads: TempDir,
}

/// Spin up the full router against the in-memory store
pub fn spawn_app() -> TestApp {
    let uploads = tempfile::tempdir().expect("Failed to create temp upload dir");

    let state = AppState::new(
        Arc::new(MemoryStore::new()),
        TokenService::new("test-secret"),
        AvatarStore::new(uploads.path()),
    );

    let server = TestServer::builder()
        .save_cookies()
        .build(create_router(state))
        .expect("Failed to start test server");

    TestApp { server, uploads }
}

/// Register a user; panics on anything but 201
pub async fn register(app: &TestApp, username: &str, name: &str, password: &str) {
    let response = app
        .server
        .post("/auth/register")
        .json(&serde_json::json!({
            "username": username,
            "name": name,
            "password": password,
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
}

/// Log in and return the logged-in user's id
///
/// The session cookie is stored on the test server, so subsequent
/// requests are authenticated as this user.
pub async fn login(app: &TestApp, username: &str, password: &str) -> uuid::Uuid {
    let response = app
        .server
        .post("/auth/login")
        .json(&serde_json::json!({
            "username": username,
            "password": password,
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    body["userInfo"]["id"]
        .as_str()
        .and_then(|id| id.parse().ok())
        .expect("login response missing userInfo.id")
}

/// Register and log in in one step, returning the user id
pub async fn register_and_login(app: &TestApp, username: &str, name: &str) -> uuid::Uuid {
    register(app, username, name, "password123").await;
    login(app, username, "password123").await
}

/// Publish an article and return it as JSON
pub async fn create_article(app: &TestApp, title: &str) -> serde_json::Value {
    let response = app
        .server
        .post("/article/create")
        .json(&serde_json::json!({
            "title": title,
            "description": "A short description",
            "content": "Some long-form content.",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    body["article"].clone()
}
