//! Authentication Handlers
//!
//! HTTP handlers for the authentication endpoints:
//!
//! - `POST /auth/register` - User registration
//! - `POST /auth/login` - Login, sets the session cookie
//! - `GET /auth/logout` - Logout, clears the session cookie

/// Request/response types
pub mod types;

/// User registration handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

pub use login::login;
pub use logout::logout;
pub use register::register;
