/**
 * Avatar Storage
 *
 * Writes uploaded avatar images to local disk under a configured directory
 * and removes superseded ones. Filenames are generated server-side so an
 * upload can never clobber another user's file.
 */

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::ApiError;

/// Local-disk avatar storage rooted at an upload directory
#[derive(Clone, Debug)]
pub struct AvatarStore {
    dir: PathBuf,
}

impl AvatarStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory uploads are written to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist uploaded avatar bytes and return the stored filename.
    ///
    /// The filename is `avatar-{timestamp}-{uuid}{ext}`, with the extension
    /// taken from the client's filename when it has one.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` when the directory cannot be created or
    /// the file cannot be written.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, ApiError> {
        let ext = Path::new(original_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();

        let filename = format!(
            "avatar-{}-{}{}",
            chrono::Utc::now().timestamp_millis(),
            Uuid::new_v4(),
            ext
        );

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ApiError::internal(format!("Failed to create upload dir: {e}")))?;

        let path = self.dir.join(&filename);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| ApiError::internal(format!("Failed to write avatar file: {e}")))?;

        tracing::info!("Stored avatar {}", filename);
        Ok(filename)
    }

    /// Remove a previously stored avatar file.
    ///
    /// Best effort: a missing or undeletable file is logged and ignored, the
    /// profile update that replaced it has already happened.
    pub async fn remove(&self, filename: &str) {
        // Stored names are server-generated; skip anything path-like.
        if filename.contains('/') || filename.contains('\\') {
            tracing::warn!("Refusing to remove suspicious avatar name: {}", filename);
            return;
        }

        let path = self.dir.join(filename);
        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::warn!("Failed to remove old avatar {}: {}", filename, e);
        }
    }
}
