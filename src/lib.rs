//! Inkpost - Blog Platform Backend
//!
//! Inkpost is the REST backend for a conventional blogging platform:
//! user registration and login, article authoring, commenting, profile
//! management with avatar upload, and a paginated/searchable article feed.
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential handling, session tokens, ownership checks
//! - **`articles`** - Article model, slug derivation, CRUD handlers
//! - **`comments`** - Comment model and handlers
//! - **`users`** - Profile handlers and avatar storage
//! - **`store`** - Store abstraction (Postgres via sqlx, in-memory fake)
//! - **`middleware`** - Request middleware (auth gate)
//! - **`error`** - API error taxonomy and HTTP conversion
//!
//! # Authentication Flow
//!
//! 1. **Register**: username/name/password → bcrypt hash → user created
//! 2. **Login**: credentials verified → signed session token set as an
//!    HTTP-only cookie (1 hour expiry)
//! 3. **Protected routes**: the auth gate verifies the cookie, attaches the
//!    resolved identity to the request, and rejects with 401 otherwise
//! 4. **Ownership**: mutating an article/comment/profile requires the acting
//!    identity to match the resource's owner (403 on mismatch)

/// Server setup, state and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication, session tokens and ownership checks
pub mod auth;

/// Article model and handlers
pub mod articles;

/// Comment model and handlers
pub mod comments;

/// User profile handlers and avatar storage
pub mod users;

/// Store abstraction and implementations
pub mod store;

/// Request middleware
pub mod middleware;

/// API error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::state::AppState;
