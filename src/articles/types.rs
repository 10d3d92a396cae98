/**
 * Article Handler Types
 *
 * Request and response types for the article endpoints. Responses use
 * camelCase field names and populate the author as a nested object.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::articles::model::ArticleWithAuthor;

/// Article author as embedded in article responses
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthorResponse {
    pub id: Uuid,
    pub name: String,
}

/// Article as returned to clients
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub content: String,
    /// Owning user, populated with the display name
    pub user: AuthorResponse,
    pub slug: String,
    pub views: i64,
    /// Ordered comment ids attached to this article
    pub comments: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ArticleWithAuthor> for ArticleResponse {
    fn from(article: ArticleWithAuthor) -> Self {
        Self {
            id: article.id,
            title: article.title,
            description: article.description,
            content: article.content,
            user: AuthorResponse {
                id: article.user_id,
                name: article.author_name,
            },
            slug: article.slug,
            views: article.views,
            comments: article.comments,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Create request
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateArticleRequest {
    pub title: String,
    pub description: String,
    pub content: String,
}

/// Update request (slug is not updatable)
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdateArticleRequest {
    pub title: String,
    pub description: String,
    pub content: String,
}

/// Query parameters for the article feed
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FetchAllParams {
    /// Case-insensitive match against title or author name
    pub search_query: Option<String>,
    /// 1-based page number, defaults to 1
    pub page: Option<u32>,
    /// Page size, defaults to 10
    pub limit: Option<u32>,
}

/// Paginated feed response
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleResponse>,
    pub total_pages: u64,
    pub total_articles: u64,
}

/// Single-article envelope, mirroring the feed's shape
#[derive(Serialize, Deserialize, Debug)]
pub struct ArticleEnvelope {
    pub article: ArticleResponse,
}

/// Create response: confirmation plus the stored article
#[derive(Serialize, Deserialize, Debug)]
pub struct CreateArticleResponse {
    pub message: String,
    pub article: ArticleResponse,
}
