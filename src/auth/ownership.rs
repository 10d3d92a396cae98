/**
 * Resource Ownership Check
 *
 * Pure authorization predicate: a mutating operation on an article, comment
 * or profile succeeds only if the acting identity equals the resource's
 * owning identity. The check runs before any write, so a mismatch performs
 * no mutation.
 */

use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::auth::AuthenticatedUser;

/// Does `identity` own the resource whose owner is `owner_id`?
pub fn owns(identity: &AuthenticatedUser, owner_id: Uuid) -> bool {
    identity.user_id == owner_id
}

/// Fail with `Forbidden` unless `identity` owns the resource
///
/// `message` is the client-facing explanation, e.g. "You are not authorized
/// to update this article".
pub fn ensure_owner(
    identity: &AuthenticatedUser,
    owner_id: Uuid,
    message: &str,
) -> Result<(), ApiError> {
    if owns(identity, owner_id) {
        Ok(())
    } else {
        tracing::warn!(
            "Ownership check failed: user {} acting on resource owned by {}",
            identity.user_id,
            owner_id
        );
        Err(ApiError::forbidden(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(user_id: Uuid) -> AuthenticatedUser {
        AuthenticatedUser { user_id }
    }

    #[test]
    fn test_owner_matches() {
        let id = Uuid::new_v4();
        assert!(owns(&identity(id), id));
        assert!(ensure_owner(&identity(id), id, "nope").is_ok());
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let err = ensure_owner(
            &identity(Uuid::new_v4()),
            Uuid::new_v4(),
            "You are not authorized to delete this comment",
        )
        .unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::FORBIDDEN);
        assert_eq!(
            err.message(),
            "You are not authorized to delete this comment"
        );
    }
}
