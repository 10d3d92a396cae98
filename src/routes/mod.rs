//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! └── router.rs       - Main router creation and route assembly
//! ```
//!
//! # Route Organization
//!
//! Only registration and login are public; every other route sits behind
//! the auth gate, which resolves the session cookie to a user before the
//! handler runs.
//!
//! ## Public Routes
//!
//! - `POST /auth/register` - User registration
//! - `POST /auth/login` - User login
//!
//! ## Protected Routes
//!
//! - `GET /auth/logout` - Clear the session cookie
//! - `POST /article/create` - Publish an article
//! - `GET /article/fetch-all` - Paginated/searchable feed
//! - `GET /article/id/{id}` - Fetch one article by id
//! - `GET /article/{slug}` - Fetch one article by slug (counts a view)
//! - `PUT /article/update/{id}` - Update own article
//! - `DELETE /article/delete/{id}` - Delete own article
//! - `POST /comment/create` - Comment on an article
//! - `DELETE /comment/delete/{id}` - Delete own comment
//! - `GET /user/profile/{id}` - Public profile
//! - `GET /user/articles/{id}` - Articles by a user
//! - `PUT /user/update` - Update own profile (multipart)
//! - `DELETE /user/delete` - Delete own account
//!
//! ## Static Files
//!
//! Uploaded avatars are served from `/uploads`.

/// Main router creation
pub mod router;

pub use router::create_router;
