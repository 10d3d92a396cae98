/**
 * Comment Model
 *
 * Persisted comment records. Every comment belongs to exactly one article,
 * which must exist at creation time, and to the user who wrote it.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment record as persisted in the store
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    /// Unique comment ID (UUID)
    pub id: Uuid,
    /// Comment text
    pub content: String,
    /// Owning user ID
    pub user_id: Uuid,
    /// Parent article ID
    pub article_id: Uuid,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Comment joined with author details for client display
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentWithAuthor {
    pub id: Uuid,
    pub content: String,
    pub user_id: Uuid,
    pub article_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Display name of the comment author
    pub author_name: String,
    /// Avatar path of the comment author, if any
    pub author_avatar: Option<String>,
    /// When the author registered
    pub author_created_at: DateTime<Utc>,
}

/// Payload for creating a comment
#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: String,
    pub user_id: Uuid,
    pub article_id: Uuid,
}

impl Comment {
    /// Build a fresh comment record from a creation payload
    pub fn from_new(new: NewComment) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            content: new.content,
            user_id: new.user_id,
            article_id: new.article_id,
            created_at: now,
            updated_at: now,
        }
    }
}
