/**
 * Login Handler
 *
 * Implements POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by username
 * 2. Verify the password against the stored bcrypt hash
 * 3. Issue a session token (1 hour expiry)
 * 4. Set it as an HTTP-only, secure, SameSite=Strict cookie and return
 *    the user's info
 *
 * # Security
 *
 * - Password verification uses bcrypt's constant-time comparison
 * - The password hash is never returned in responses
 * - The token is carried only in the cookie, out of reach of page scripts
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::auth::handlers::types::{LoginRequest, LoginResponse, UserResponse};
use crate::auth::sessions::{SESSION_COOKIE, TOKEN_TTL};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing username or password
/// * `401 Unauthorized` - Unknown user or wrong password
/// * `500 Internal Server Error` - Store or token failure
///
/// # Example Response
///
/// ```json
/// {
///   "message": "Login successful",
///   "userInfo": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "username": "alice",
///     "name": "Alice Doe",
///     "profileImg": null
///   }
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    if request.username.trim().is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("All fields are required"));
    }

    tracing::info!("Login request for: {}", request.username);

    let user = state
        .store
        .user_by_username(&request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.username);
            ApiError::auth("User doesn't exist")
        })?;

    let valid = bcrypt::verify(&request.password, &user.password_hash)?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(ApiError::auth("Invalid credentials"));
    }

    let token = state
        .tokens
        .issue(user.id)
        .map_err(|e| ApiError::internal(format!("failed to issue token: {e}")))?;

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::seconds(TOKEN_TTL.as_secs() as i64))
        .build();

    tracing::info!("User logged in successfully: {}", user.username);

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            message: "Login successful".to_string(),
            user_info: UserResponse::from(user),
        }),
    ))
}
