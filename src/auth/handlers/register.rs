/**
 * Registration Handler
 *
 * Implements POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Validate that username, name and password are present
 * 2. Check the username is not already taken
 * 3. Hash the password with bcrypt
 * 4. Create the user in the store
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt DEFAULT_COST before storage
 * - The hash is never returned to any client
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::RegisterRequest;
use crate::auth::users::NewUser;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - A field is missing or empty, or the username is
///   already taken
/// * `500 Internal Server Error` - Hashing or store failure
///
/// # Example Request
///
/// ```http
/// POST /auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "name": "Alice Doe",
///   "password": "correct horse battery staple"
/// }
/// ```
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    if request.username.trim().is_empty()
        || request.name.trim().is_empty()
        || request.password.is_empty()
    {
        return Err(ApiError::validation("All fields are required"));
    }

    tracing::info!("Registration request for username: {}", request.username);

    if state
        .store
        .user_by_username(&request.username)
        .await?
        .is_some()
    {
        tracing::warn!("Username already exists: {}", request.username);
        return Err(ApiError::conflict("User already exists"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = state
        .store
        .create_user(NewUser {
            username: request.username,
            name: request.name,
            password_hash,
        })
        .await?;

    tracing::info!("User created successfully: {} ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": "User registered successfully" })),
    ))
}
