/**
 * Article Model
 *
 * Persisted article records. An article keeps the ordered list of its
 * comment ids on itself, mirroring the document shape of the data model.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Article record as persisted in the store
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Article {
    /// Unique article ID (UUID)
    pub id: Uuid,
    /// Title (minimum 3 characters)
    pub title: String,
    /// Short description (maximum 300 characters)
    pub description: String,
    /// Rich-text content
    pub content: String,
    /// Owning user ID
    pub user_id: Uuid,
    /// Unique URL-safe slug derived from the title
    pub slug: String,
    /// View counter, incremented on every fetch by slug
    pub views: i64,
    /// Ordered list of comment ids attached to this article
    pub comments: Vec<Uuid>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Article joined with its author's display name
///
/// Listing and fetch endpoints populate the author so clients don't need a
/// second round trip.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ArticleWithAuthor {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub content: String,
    pub user_id: Uuid,
    pub slug: String,
    pub views: i64,
    pub comments: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Display name of the owning user
    pub author_name: String,
}

/// Payload for creating an article
///
/// The slug is computed by the handler from the title before the store is
/// asked to persist anything, so uniqueness is checked against the final
/// value.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub description: String,
    pub content: String,
    pub slug: String,
    pub user_id: Uuid,
}

/// Fields an owner may change on an existing article
///
/// The slug deliberately stays fixed on update so published URLs never
/// break.
#[derive(Debug, Clone)]
pub struct ArticlePatch {
    pub title: String,
    pub description: String,
    pub content: String,
}

impl Article {
    /// Build a fresh article record from a creation payload
    pub fn from_new(new: NewArticle) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            content: new.content,
            user_id: new.user_id,
            slug: new.slug,
            views: 0,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
