//! Authentication Module
//!
//! This module handles user credentials, session tokens and ownership
//! checks. It provides HTTP handlers for the authentication endpoints and
//! the pure pieces used by the auth gate middleware.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model
//! ├── sessions.rs     - Session token issuing and verification
//! ├── ownership.rs    - Resource ownership predicate
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - Login handler (sets the session cookie)
//!     └── logout.rs   - Logout handler (clears the session cookie)
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username/name/password → bcrypt hash → user created
//! 2. **Login**: credentials verified → token issued and set as an
//!    HTTP-only, secure, SameSite=Strict cookie
//! 3. **Logout**: the cookie is cleared; the token itself is not revocable
//!    server-side and stays valid until its fixed expiry
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never returned
//! - Session tokens are stateless, verified by signature and expiry only
//! - Invalid credentials return 401 without distinguishing detail beyond
//!   the original API's messages

/// User model
pub mod users;

/// Session token issuing and verification
pub mod sessions;

/// Resource ownership predicate
pub mod ownership;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, RegisterRequest};
pub use handlers::{login, logout, register};
pub use ownership::{ensure_owner, owns};
pub use sessions::{TokenError, TokenService};
pub use users::User;
