/**
 * Error Conversion
 *
 * This module converts API errors into HTTP responses and maps lower-level
 * errors (store, hashing, multipart) into the API taxonomy.
 *
 * # Response Format
 *
 * Error responses are returned as JSON:
 * ```json
 * {
 *   "message": "Error message"
 * }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;
use crate::store::StoreError;

impl IntoResponse for ApiError {
    /// Convert an API error into an HTTP response
    ///
    /// Internal errors are logged with their detail before being flattened
    /// to a generic 500 body.
    fn into_response(self) -> Response {
        if let ApiError::Internal { detail } = &self {
            tracing::error!("Internal error: {}", detail);
        }

        let status = self.status_code();
        let body = serde_json::json!({ "message": self.message() });

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    /// Map a store error into the API taxonomy
    ///
    /// Uniqueness violations surface as conflicts with a field-specific
    /// message; everything else a handler did not anticipate is internal.
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { field: "username" } => Self::conflict("User already exists"),
            StoreError::Duplicate { field: "slug" } => {
                Self::conflict("An article with this title already exists")
            }
            StoreError::Duplicate { field } => Self::conflict(format!("Duplicate {field}")),
            StoreError::NotFound => Self::not_found("Resource not found"),
            StoreError::Backend { message } => Self::internal(message),
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::internal(format!("password hashing failed: {err}"))
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        Self::validation(format!("Invalid multipart request: {err}"))
    }
}

/// Convert a bare status code into the taxonomy
///
/// Used by extractors that can only reject with a `StatusCode`.
impl From<StatusCode> for ApiError {
    fn from(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::auth("Authentication token is required"),
            StatusCode::BAD_REQUEST => Self::validation("Bad request"),
            other => Self::internal(format!("unexpected status {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_username_maps_to_conflict() {
        let api: ApiError = StoreError::Duplicate { field: "username" }.into();
        assert_eq!(api.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(api.message(), "User already exists");
    }

    #[test]
    fn test_duplicate_slug_maps_to_conflict() {
        let api: ApiError = StoreError::Duplicate { field: "slug" }.into();
        assert_eq!(api.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(api.message(), "An article with this title already exists");
    }

    #[test]
    fn test_backend_error_maps_to_internal() {
        let api: ApiError = StoreError::Backend {
            message: "connection refused".to_string(),
        }
        .into();
        assert_eq!(api.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message(), "Internal server error");
    }
}
