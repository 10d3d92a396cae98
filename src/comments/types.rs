/**
 * Comment Handler Types
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::comments::model::CommentWithAuthor;

/// Create request
///
/// `article` is the id of the article being commented on.
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateCommentRequest {
    pub content: String,
    pub article: Uuid,
}

/// Comment author as embedded in comment responses
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CommentAuthorResponse {
    pub id: Uuid,
    pub name: String,
    pub profile_img: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Comment as returned to clients, author populated
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    pub content: String,
    pub user: CommentAuthorResponse,
    /// Parent article id
    pub article: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(comment: CommentWithAuthor) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            user: CommentAuthorResponse {
                id: comment.user_id,
                name: comment.author_name,
                profile_img: comment.author_avatar,
                created_at: comment.author_created_at,
            },
            article: comment.article_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

/// Create response: confirmation plus the stored comment
#[derive(Serialize, Deserialize, Debug)]
pub struct CreateCommentResponse {
    pub message: String,
    pub comment: CommentResponse,
}
