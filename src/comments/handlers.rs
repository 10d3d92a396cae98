/**
 * Comment Handlers
 *
 * HTTP handlers for posting and deleting comments. Creation requires the
 * parent article to exist; deletion requires ownership and also unlinks
 * the comment id from the parent article.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::auth::ownership::ensure_owner;
use crate::comments::model::NewComment;
use crate::comments::types::{CommentResponse, CreateCommentRequest, CreateCommentResponse};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Create handler (POST /comment/create)
///
/// # Errors
///
/// * `400 Bad Request` - Empty content
/// * `404 Not Found` - Parent article does not exist
pub async fn create_comment(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(request): Json<CreateCommentRequest>,
) -> Result<Json<CreateCommentResponse>, ApiError> {
    if request.content.trim().is_empty() {
        return Err(ApiError::validation("All fields are required"));
    }

    if state.store.article_by_id(request.article).await?.is_none() {
        return Err(ApiError::not_found("Article not found"));
    }

    let comment = state
        .store
        .create_comment(NewComment {
            content: request.content,
            user_id: identity.user_id,
            article_id: request.article,
        })
        .await
        .map_err(|e| match e {
            // The article can vanish between the check and the write.
            crate::store::StoreError::NotFound => ApiError::not_found("Article not found"),
            other => other.into(),
        })?;

    tracing::info!(
        "Comment {} posted on article {} by {}",
        comment.id,
        comment.article_id,
        identity.user_id
    );

    Ok(Json(CreateCommentResponse {
        message: "Comment posted".to_string(),
        comment: CommentResponse::from(comment),
    }))
}

/// Delete handler (DELETE /comment/delete/{id})
///
/// Owner only. Removes the comment and pulls its id out of the parent
/// article's comment list.
pub async fn delete_comment(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let comment = state
        .store
        .comment_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Comment not found"))?;

    ensure_owner(
        &identity,
        comment.user_id,
        "You are not authorized to delete this comment",
    )?;

    state.store.delete_comment(id).await?;

    Ok(Json(
        serde_json::json!({ "message": "Comment deleted successfully" }),
    ))
}
