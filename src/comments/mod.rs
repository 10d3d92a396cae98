//! Comments Module
//!
//! Commenting on articles.
//!
//! # Endpoints
//!
//! - `POST /comment/create` - Comment on an existing article
//! - `DELETE /comment/delete/{id}` - Delete own comment
//!
//! A comment's id is kept in the parent article's ordered comment list;
//! deleting the comment removes it from that list as well.

/// Comment records
pub mod model;

/// Request/response types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use model::{Comment, CommentWithAuthor, NewComment};
