//! Users Module
//!
//! Public profiles, per-author article listings, and account management
//! (profile edit with avatar upload, account deletion).
//!
//! # Endpoints
//!
//! - `GET /user/profile/{id}` - Public profile of any user
//! - `GET /user/articles/{id}` - Articles written by a user
//! - `PUT /user/update` - Update own username/name/avatar (multipart)
//! - `DELETE /user/delete` - Delete own account and everything it owns
//!
//! Avatar images live on local disk under the configured upload directory
//! and are served back at `/uploads/{filename}`.

/// Avatar file storage
pub mod avatar;

/// HTTP handlers
pub mod handlers;

pub use avatar::AvatarStore;
