//! Authentication integration tests
//!
//! Covers registration, login, logout and the auth gate in front of
//! protected routes, end to end against the in-memory store.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use common::{login, register, spawn_app};

#[tokio::test]
async fn test_register_success() {
    let app = spawn_app();

    let response = app
        .server
        .post("/auth/register")
        .json(&serde_json::json!({
            "username": "alice",
            "name": "Alice",
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "User registered successfully");
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = spawn_app();

    let response = app
        .server
        .post("/auth/register")
        .json(&serde_json::json!({
            "username": "alice",
            "name": "",
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "All fields are required");
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = spawn_app();
    register(&app, "alice", "Alice", "password123").await;

    let response = app
        .server
        .post("/auth/register")
        .json(&serde_json::json!({
            "username": "alice",
            "name": "Other Alice",
            "password": "different456",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "User already exists");
}

#[tokio::test]
async fn test_login_success_sets_cookie_and_returns_user() {
    let app = spawn_app();
    register(&app, "alice", "Alice", "password123").await;

    let response = app
        .server
        .post("/auth/login")
        .json(&serde_json::json!({
            "username": "alice",
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let cookie = response.cookie("token");
    assert!(!cookie.value().is_empty());

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["userInfo"]["username"], "alice");
    assert_eq!(body["userInfo"]["name"], "Alice");
    // The hash must never appear in any response
    assert!(body["userInfo"].get("password").is_none());
    assert!(body["userInfo"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_login_unknown_user() {
    let app = spawn_app();

    let response = app
        .server
        .post("/auth/login")
        .json(&serde_json::json!({
            "username": "ghost",
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "User doesn't exist");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = spawn_app();
    register(&app, "alice", "Alice", "password123").await;

    let response = app
        .server
        .post("/auth/login")
        .json(&serde_json::json!({
            "username": "alice",
            "password": "wrongpassword",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_protected_route_requires_cookie() {
    let app = spawn_app();

    let response = app.server.get("/article/fetch-all").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Authentication token is required");
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = spawn_app();

    let response = app
        .server
        .get("/article/fetch-all")
        .add_header("cookie", "token=not.a.token")
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Invalid token");
}

#[tokio::test]
async fn test_logout_clears_session() {
    let app = spawn_app();
    register(&app, "alice", "Alice", "password123").await;
    login(&app, "alice", "password123").await;

    let response = app.server.get("/auth/logout").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Logout successful");

    // Cookie is gone, so the next protected request is rejected
    let response = app.server.get("/article/fetch-all").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_survives_across_requests() {
    let app = spawn_app();
    register(&app, "alice", "Alice", "password123").await;
    login(&app, "alice", "password123").await;

    // Two consecutive protected requests on the same saved cookie
    for _ in 0..2 {
        let response = app.server.get("/article/fetch-all").await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }
}
