//! Local storage for uploaded images.

use std::path::{Path, PathBuf};

use catalog_core::upload::{public_url, stored_file_name};

use crate::extract::UploadedFile;

/// A file written by [`UploadStore::save`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// Name of the file inside the upload directory.
    pub file_name: String,
    /// URL path the file is served at, as persisted in the database.
    pub url: String,
    /// Location on disk.
    pub path: PathBuf,
}

/// Writes uploads into one directory under generated names.
///
/// Content type and size are not inspected; the request body limit is the
/// only bound.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if it is missing.
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Store one uploaded file under a fresh name.
    pub async fn save(&self, file: &UploadedFile) -> std::io::Result<StoredUpload> {
        self.ensure_dir().await?;

        let file_name = stored_file_name(&file.field, file.file_name.as_deref());
        let path = self.dir.join(&file_name);
        tokio::fs::write(&path, &file.data).await?;

        tracing::debug!(
            field = %file.field,
            path = %path.display(),
            bytes = file.data.len(),
            "Stored upload"
        );

        Ok(StoredUpload {
            url: public_url(&file_name),
            file_name,
            path,
        })
    }

    /// Store several files. If any write fails, the files already written
    /// for this call are removed again.
    pub async fn save_all(&self, files: &[&UploadedFile]) -> std::io::Result<Vec<StoredUpload>> {
        let mut saved = Vec::with_capacity(files.len());
        for file in files {
            match self.save(file).await {
                Ok(stored) => saved.push(stored),
                Err(e) => {
                    self.discard(&saved).await;
                    return Err(e);
                }
            }
        }
        Ok(saved)
    }

    /// Remove stored files. Failures are logged, not returned.
    pub async fn discard(&self, uploads: &[StoredUpload]) {
        for upload in uploads {
            if let Err(e) = tokio::fs::remove_file(&upload.path).await {
                tracing::warn!(
                    path = %upload.path.display(),
                    error = %e,
                    "Failed to remove discarded upload"
                );
            }
        }
    }

    /// Pass `result` through, removing `uploads` first if it is an error.
    ///
    /// Used after the database write that references the uploads, so a
    /// failed insert or update leaves no orphaned files behind.
    pub async fn discard_on_error<T, E>(
        &self,
        uploads: &[StoredUpload],
        result: Result<T, E>,
    ) -> Result<T, E> {
        if result.is_err() {
            self.discard(uploads).await;
        }
        result
    }
}
