/**
 * Article Handlers
 *
 * HTTP handlers for article CRUD and the paginated/searchable feed.
 * All handlers run behind the auth gate; update and delete additionally
 * check ownership before touching the store.
 */

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use uuid::Uuid;

use crate::articles::model::{ArticlePatch, NewArticle};
use crate::articles::slug::slugify;
use crate::articles::types::{
    ArticleEnvelope, ArticleListResponse, ArticleResponse, CreateArticleRequest,
    CreateArticleResponse, FetchAllParams, UpdateArticleRequest,
};
use crate::auth::ownership::ensure_owner;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

const DEFAULT_PAGE_SIZE: u32 = 10;

fn validate_fields(title: &str, description: &str, content: &str) -> Result<(), ApiError> {
    if title.trim().is_empty() || description.trim().is_empty() || content.trim().is_empty() {
        return Err(ApiError::validation("All fields are required"));
    }
    // Limits are in characters, not bytes, so multibyte titles count fairly.
    if title.trim().chars().count() < 3 {
        return Err(ApiError::validation("Title must be at least 3 characters"));
    }
    if description.chars().count() > 300 {
        return Err(ApiError::validation(
            "Description must be at most 300 characters",
        ));
    }
    Ok(())
}

/// Create article handler (POST /article/create)
///
/// The slug is derived from the title before the store is asked to persist
/// anything; a colliding slug fails with 400 and writes nothing.
pub async fn create_article(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(request): Json<CreateArticleRequest>,
) -> Result<Json<CreateArticleResponse>, ApiError> {
    validate_fields(&request.title, &request.description, &request.content)?;

    let slug = slugify(&request.title);
    tracing::info!("Creating article '{}' as {}", slug, identity.user_id);

    let article = state
        .store
        .create_article(NewArticle {
            title: request.title,
            description: request.description,
            content: request.content,
            slug,
            user_id: identity.user_id,
        })
        .await?;

    let populated = state
        .store
        .article_by_id(article.id)
        .await?
        .ok_or_else(|| ApiError::internal("created article vanished"))?;

    Ok(Json(CreateArticleResponse {
        message: "Article published".to_string(),
        article: ArticleResponse::from(populated),
    }))
}

/// Feed handler (GET /article/fetch-all?searchQuery&page&limit)
///
/// Pages through articles newest first. `searchQuery` matches the title or
/// the author's display name, case-insensitively.
pub async fn fetch_all_articles(
    State(state): State<AppState>,
    Query(params): Query<FetchAllParams>,
) -> Result<Json<ArticleListResponse>, ApiError> {
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
    let search = params
        .search_query
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let (articles, total) = state.store.list_articles(search, page, limit).await?;

    Ok(Json(ArticleListResponse {
        articles: articles.into_iter().map(ArticleResponse::from).collect(),
        total_pages: total.div_ceil(u64::from(limit)),
        total_articles: total,
    }))
}

/// Fetch-by-id handler (GET /article/id/{id})
pub async fn get_article_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ArticleEnvelope>, ApiError> {
    let article = state
        .store
        .article_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Article not found"))?;

    Ok(Json(ArticleEnvelope {
        article: ArticleResponse::from(article),
    }))
}

/// Fetch-by-slug handler (GET /article/{slug})
///
/// Each fetch increments the article's view counter by exactly 1; the
/// returned article carries the post-increment count.
pub async fn get_article_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ArticleEnvelope>, ApiError> {
    let article = state
        .store
        .view_article(&slug)
        .await?
        .ok_or_else(|| ApiError::not_found("Article not found"))?;

    Ok(Json(ArticleEnvelope {
        article: ArticleResponse::from(article),
    }))
}

/// Update handler (PUT /article/update/{id})
///
/// Owner only. The slug stays fixed so published URLs keep working.
pub async fn update_article(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateArticleRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let article = state
        .store
        .article_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Article not found"))?;

    ensure_owner(
        &identity,
        article.user_id,
        "You are not authorized to update this article",
    )?;

    validate_fields(&request.title, &request.description, &request.content)?;

    state
        .store
        .update_article(
            id,
            ArticlePatch {
                title: request.title,
                description: request.description,
                content: request.content,
            },
        )
        .await?;

    Ok(Json(
        serde_json::json!({ "message": "Article updated successfully" }),
    ))
}

/// Delete handler (DELETE /article/delete/{id})
///
/// Owner only. Comments attached to the article are deleted with it.
pub async fn delete_article(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let article = state
        .store
        .article_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Article not found"))?;

    ensure_owner(
        &identity,
        article.user_id,
        "You are not authorized to delete this article",
    )?;

    state.store.delete_article(id).await?;

    tracing::info!("Article {} deleted by {}", id, identity.user_id);

    Ok(Json(
        serde_json::json!({ "message": "Article deleted successfully" }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_empty_fields() {
        assert!(validate_fields("Title", "", "content").is_err());
        assert!(validate_fields("", "desc", "content").is_err());
        assert!(validate_fields("Title", "desc", "   ").is_err());
    }

    #[test]
    fn test_title_minimum_counts_characters_not_bytes() {
        // Two characters, six bytes: still too short.
        assert!(validate_fields("日本", "desc", "content").is_err());
        // Three characters, nine bytes: long enough.
        assert!(validate_fields("日本語", "desc", "content").is_ok());
    }

    #[test]
    fn test_description_limit_counts_characters_not_bytes() {
        // 300 multibyte characters (900 bytes) stay within the limit.
        let at_limit: String = "語".repeat(300);
        assert!(validate_fields("Title", &at_limit, "content").is_ok());

        let over_limit: String = "語".repeat(301);
        assert!(validate_fields("Title", &over_limit, "content").is_err());
    }
}
