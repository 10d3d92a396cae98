/**
 * API Error Types
 *
 * This module defines the error taxonomy shared by all HTTP handlers.
 * Each variant carries a human-readable message that is surfaced to the
 * client verbatim in the JSON response body.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// API error taxonomy
///
/// This enum represents all error classes that a handler can produce.
/// Each variant maps to a fixed HTTP status code via [`ApiError::status_code`]
/// and carries the message returned to the client.
///
/// Note that `Conflict` maps to 400, not 409: duplicate usernames and
/// duplicate slugs are reported as plain bad requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request fields (400)
    #[error("{message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// Missing, invalid or expired session token (401)
    #[error("{message}")]
    Auth {
        /// Human-readable error message
        message: String,
    },

    /// Ownership mismatch on a gated mutation (403)
    #[error("{message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// Resource does not exist (404)
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Duplicate username or slug (400)
    #[error("{message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Unexpected failure, store error or similar (500)
    ///
    /// The detail is logged server-side; clients only ever see a generic
    /// message for this variant.
    #[error("Internal server error")]
    Internal {
        /// Internal detail, never returned to clients
        detail: String,
    },
}

impl ApiError {
    /// Create a validation error (400)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an authentication error (401)
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a forbidden error (403)
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a not-found error (404)
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a conflict error (400)
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create an internal error (500)
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Auth { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// For `Internal` errors the detail is withheld and a generic message
    /// is returned instead.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::Auth { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::Conflict { message } => message.clone(),
            Self::Internal { .. } => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::auth("no token").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::forbidden("not yours").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::not_found("gone").status_code(),
            StatusCode::NOT_FOUND
        );
        // Conflicts are reported as 400, not 409.
        assert_eq!(
            ApiError::conflict("duplicate").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_message() {
        let error = ApiError::forbidden("You are not authorized to update this article");
        assert_eq!(
            error.message(),
            "You are not authorized to update this article"
        );
    }

    #[test]
    fn test_internal_detail_is_withheld() {
        let error = ApiError::internal("database connection refused");
        assert_eq!(error.message(), "Internal server error");
        assert!(!error.message().contains("database"));
    }
}
