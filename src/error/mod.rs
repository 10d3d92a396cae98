//! API Error Module
//!
//! This module defines the error taxonomy used by all HTTP handlers and the
//! conversion of those errors into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and From implementations
//! ```
//!
//! # Error Taxonomy
//!
//! - `Validation` - 400, missing/malformed fields
//! - `Auth` - 401, missing/invalid/expired token
//! - `Forbidden` - 403, ownership mismatch
//! - `NotFound` - 404, missing resource
//! - `Conflict` - 400, duplicate username/slug
//! - `Internal` - 500, unexpected/store failure
//!
//! Every handler-level error is caught at the boundary and converted to a
//! JSON `{"message": ...}` body with the corresponding status code. There
//! are no retries and no partial-success responses.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
