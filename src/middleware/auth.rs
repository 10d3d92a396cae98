/**
 * Auth Gate Middleware
 *
 * Request-level state machine:
 *
 * ```text
 * NoToken      → reject 401
 * TokenPresent → verify → Valid   (attach identity, continue)
 *                       | Invalid (reject 401)
 * ```
 *
 * The session token is read from the `token` cookie. Verification failure
 * is always terminal for the request; there are no retries. On success the
 * resolved identity is attached to the request extensions for handlers to
 * extract.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::auth::sessions::{TokenError, SESSION_COOKIE};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Identity resolved from a verified session token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the session token from the `token` cookie
/// 2. Verifies signature and expiry
/// 3. Checks the user still exists in the store
/// 4. Attaches [`AuthenticatedUser`] to the request extensions
///
/// Returns 401 if the token is missing, invalid or expired.
pub async fn auth_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| {
            tracing::warn!("Missing session cookie");
            ApiError::auth("Authentication token is required")
        })?;

    let user_id = state.tokens.verify(&token).map_err(|e| {
        tracing::warn!("Token verification failed: {}", e);
        match e {
            TokenError::Expired => ApiError::auth("Token expired"),
            TokenError::Invalid => ApiError::auth("Invalid token"),
        }
    })?;

    // A valid signature is not enough: the account may have been deleted
    // while its token was still live.
    if state.store.user_by_id(user_id).await?.is_none() {
        tracing::warn!("Token for deleted user: {}", user_id);
        return Err(ApiError::auth("Invalid token"));
    }

    request.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Handlers behind the auth gate take this as a parameter to get the
/// identity the gate attached to the request.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::auth("Authentication token is required")
            })
    }
}
