//! Store Module
//!
//! This module defines the storage abstraction behind all resource
//! services and its two implementations.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs      - Store trait, StoreError, module exports
//! ├── postgres.rs - PostgreSQL implementation (sqlx)
//! └── memory.rs   - In-memory implementation (tests, DB-less runs)
//! ```
//!
//! # Design
//!
//! The store handle is explicit configuration injected at process start,
//! not ambient global state: handlers receive an `Arc<dyn Store>` through
//! the application state, which lets tests swap in the in-memory fake.
//!
//! Single-record writes are atomic. The user-deletion cascade (user plus
//! owned articles and comments) runs inside a transaction on Postgres;
//! the in-memory store performs it under a single write lock.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::articles::model::{Article, ArticlePatch, ArticleWithAuthor, NewArticle};
use crate::auth::users::{NewUser, User};
use crate::comments::model::{Comment, CommentWithAuthor, NewComment};

/// PostgreSQL implementation
pub mod postgres;

/// In-memory implementation
pub mod memory;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

/// Storage failure
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated (`username` or `slug`)
    #[error("duplicate {field}")]
    Duplicate {
        /// Name of the unique field that collided
        field: &'static str,
    },

    /// The addressed record does not exist
    #[error("record not found")]
    NotFound,

    /// Backend failure (connection, query, serialization)
    #[error("{message}")]
    Backend {
        /// Backend error detail
        message: String,
    },
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound,
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                let constraint = db.constraint().unwrap_or_default();
                if constraint.contains("username") {
                    Self::Duplicate { field: "username" }
                } else if constraint.contains("slug") {
                    Self::Duplicate { field: "slug" }
                } else {
                    Self::Backend {
                        message: format!("unique violation: {constraint}"),
                    }
                }
            }
            _ => Self::Backend {
                message: err.to_string(),
            },
        }
    }
}

/// Storage abstraction behind the article, comment and user services
///
/// Methods that address a single record by id return `Ok(None)` (reads) or
/// `Err(StoreError::NotFound)` (writes) when the record is missing;
/// uniqueness collisions surface as [`StoreError::Duplicate`].
#[async_trait]
pub trait Store: Send + Sync {
    // ----- Users -----

    /// Persist a new user; fails with `Duplicate("username")` if taken
    async fn create_user(&self, new: NewUser) -> Result<User, StoreError>;

    /// Look up a user by username
    async fn user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Look up a user by id
    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Update username and display name; replaces the avatar path when
    /// `avatar` is `Some`
    async fn update_user(
        &self,
        id: Uuid,
        username: String,
        name: String,
        avatar: Option<String>,
    ) -> Result<User, StoreError>;

    /// Delete a user together with all their articles and comments
    async fn delete_user_cascade(&self, id: Uuid) -> Result<(), StoreError>;

    // ----- Articles -----

    /// Persist a new article; fails with `Duplicate("slug")` on collision
    async fn create_article(&self, new: NewArticle) -> Result<Article, StoreError>;

    /// Page through articles, newest first, with author names populated
    ///
    /// `search` matches the title or the author's display name,
    /// case-insensitively. Returns the page plus the total match count.
    async fn list_articles(
        &self,
        search: Option<&str>,
        page: u32,
        limit: u32,
    ) -> Result<(Vec<ArticleWithAuthor>, u64), StoreError>;

    /// Fetch an article by id with its author name
    async fn article_by_id(&self, id: Uuid) -> Result<Option<ArticleWithAuthor>, StoreError>;

    /// Fetch an article by slug, incrementing its view counter by one
    ///
    /// The increment and read are a single store operation so the counter
    /// moves by exactly 1 per fetch.
    async fn view_article(&self, slug: &str) -> Result<Option<ArticleWithAuthor>, StoreError>;

    /// All articles owned by a user, newest first
    async fn articles_by_user(&self, user_id: Uuid) -> Result<Vec<ArticleWithAuthor>, StoreError>;

    /// Update title, description and content (slug stays fixed)
    async fn update_article(&self, id: Uuid, patch: ArticlePatch) -> Result<(), StoreError>;

    /// Delete an article and the comments attached to it
    async fn delete_article(&self, id: Uuid) -> Result<(), StoreError>;

    // ----- Comments -----

    /// Persist a new comment and link its id into the parent article
    ///
    /// Fails with `NotFound` if the parent article does not exist.
    async fn create_comment(&self, new: NewComment) -> Result<CommentWithAuthor, StoreError>;

    /// Look up a comment by id
    async fn comment_by_id(&self, id: Uuid) -> Result<Option<Comment>, StoreError>;

    /// Delete a comment and remove its id from the parent article's list
    async fn delete_comment(&self, id: Uuid) -> Result<(), StoreError>;
}
