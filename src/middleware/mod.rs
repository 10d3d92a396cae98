//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! - **`auth`** - The auth gate protecting every route that requires a
//!   logged-in user

pub mod auth;

pub use auth::{auth_gate, AuthUser, AuthenticatedUser};
