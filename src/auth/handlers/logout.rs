/**
 * Logout Handler
 *
 * Implements GET /auth/logout. Clears the client-held session cookie; the
 * server keeps no session state, so the token itself stays valid until its
 * fixed expiry.
 */

use axum::response::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::auth::sessions::SESSION_COOKIE;

/// Logout handler
///
/// Always succeeds for an authenticated caller; the only effect is the
/// removal cookie sent back to the client.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<serde_json::Value>) {
    let removal = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .build();

    (
        jar.remove(removal),
        Json(serde_json::json!({ "message": "Logout successful" })),
    )
}
