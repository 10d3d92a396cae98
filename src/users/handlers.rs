/**
 * User Handlers
 *
 * Public profile and per-author article listing, plus the authenticated
 * account endpoints: multipart profile update with avatar upload, and
 * account deletion with full cascade.
 */

use axum::{
    extract::{Multipart, Path, State},
    response::Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

use crate::articles::types::ArticleResponse;
use crate::auth::handlers::types::UserResponse;
use crate::auth::sessions::SESSION_COOKIE;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Profile handler (GET /user/profile/{id})
///
/// Public profile of any user. The password hash never leaves the server,
/// `UserResponse` does not carry it.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let user = state
        .store
        .user_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("User doesn't exist"))?;

    Ok(Json(serde_json::json!({
        "user": UserResponse::from(user),
    })))
}

/// Author listing handler (GET /user/articles/{id})
///
/// All articles written by the given user, newest first.
pub async fn get_user_articles(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if state.store.user_by_id(id).await?.is_none() {
        return Err(ApiError::not_found("User doesn't exist"));
    }

    let articles = state.store.articles_by_user(id).await?;
    let articles: Vec<ArticleResponse> = articles.into_iter().map(ArticleResponse::from).collect();

    Ok(Json(serde_json::json!({ "articles": articles })))
}

/// Update handler (PUT /user/update)
///
/// Multipart form with `username` and `name` text fields and an optional
/// `profileImg` file field. When a new avatar is uploaded the previous one
/// is removed from disk after the profile row has been updated.
///
/// # Errors
///
/// * `400 Bad Request` - Missing fields, or the new username is taken
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let current = state
        .store
        .user_by_id(identity.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User doesn't exist"))?;

    let mut username = None;
    let mut name = None;
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("username") => username = Some(field.text().await?),
            Some("name") => name = Some(field.text().await?),
            Some("profileImg") => {
                let original_name = field.file_name().unwrap_or("avatar").to_string();
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    upload = Some((original_name, bytes.to_vec()));
                }
            }
            _ => {}
        }
    }

    let username = username.filter(|u| !u.trim().is_empty());
    let name = name.filter(|n| !n.trim().is_empty());
    let (Some(username), Some(name)) = (username, name) else {
        return Err(ApiError::validation("All fields are required"));
    };

    let new_avatar = match &upload {
        Some((original_name, bytes)) => Some(state.avatars.save(original_name, bytes).await?),
        None => None,
    };

    let updated = match state
        .store
        .update_user(identity.user_id, username, name, new_avatar.clone())
        .await
    {
        Ok(user) => user,
        Err(e) => {
            // The row still points at the old image; don't orphan the new one.
            if let Some(filename) = &new_avatar {
                state.avatars.remove(filename).await;
            }
            return Err(e.into());
        }
    };

    // The old image is only orphaned once the row points at the new one.
    if upload.is_some() {
        if let Some(old) = &current.avatar {
            state.avatars.remove(old).await;
        }
    }

    tracing::info!("User {} updated their profile", identity.user_id);

    Ok(Json(serde_json::json!({
        "message": "User updated successfully",
        "user": UserResponse::from(updated),
    })))
}

/// Delete handler (DELETE /user/delete)
///
/// Removes the account, every article it owns, every comment it wrote, and
/// its avatar file, then clears the session cookie.
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    jar: CookieJar,
) -> Result<(CookieJar, Json<serde_json::Value>), ApiError> {
    let user = state
        .store
        .user_by_id(identity.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User doesn't exist"))?;

    state.store.delete_user_cascade(identity.user_id).await?;

    if let Some(avatar) = &user.avatar {
        state.avatars.remove(avatar).await;
    }

    tracing::info!("User {} deleted their account", identity.user_id);

    let removal = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .build();

    Ok((
        jar.remove(removal),
        Json(serde_json::json!({ "message": "User deleted" })),
    ))
}
