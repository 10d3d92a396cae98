//! Articles Module
//!
//! Article authoring and the paginated/searchable feed.
//!
//! # Module Structure
//!
//! ```text
//! articles/
//! ├── mod.rs      - Module exports and documentation
//! ├── model.rs    - Article records
//! ├── slug.rs     - Slug derivation from titles
//! ├── types.rs    - Request/response types
//! └── handlers.rs - HTTP handlers
//! ```
//!
//! # Endpoints
//!
//! - `POST /article/create` - Create an article (slug derived from title)
//! - `GET /article/fetch-all` - Paginated/searchable listing, newest first
//! - `GET /article/id/{id}` - Fetch by id
//! - `GET /article/{slug}` - Fetch by slug, incrementing the view counter
//! - `PUT /article/update/{id}` - Update (owner only)
//! - `DELETE /article/delete/{id}` - Delete (owner only)
//!
//! All endpoints sit behind the auth gate; update and delete additionally
//! require the acting identity to own the article.

/// Article records
pub mod model;

/// Slug derivation
pub mod slug;

/// Request/response types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use model::{Article, ArticlePatch, ArticleWithAuthor, NewArticle};
pub use slug::slugify;
