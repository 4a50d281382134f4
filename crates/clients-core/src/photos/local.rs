//! Photo store backed by a directory on the local filesystem.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use super::validate_photo_name;
use crate::paths::{PathError, ensure_directory};
use crate::ports::{PhotoStore, PhotoStoreError};

/// Stores photos as plain files inside a single uploads directory.
#[derive(Debug, Clone)]
pub struct LocalPhotoStore {
    root: PathBuf,
}

impl LocalPhotoStore {
    /// Open (creating if needed) the uploads directory at `root`.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, PathError> {
        let root = root.as_ref();
        ensure_directory(root)?;
        let root = root.canonicalize().map_err(|e| PathError::CreateFailed {
            path: root.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self { root })
    }

    /// The absolute uploads directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, file_name: &str) -> Result<PathBuf, PhotoStoreError> {
        validate_photo_name(file_name).map(|name| self.root.join(name))
    }

    /// A file counts as present only if it can be opened for reading.
    async fn readable(path: &Path) -> io::Result<bool> {
        match fs::metadata(path).await {
            Ok(meta) if meta.is_file() => match fs::File::open(path).await {
                Ok(_) => Ok(true),
                Err(e) if e.kind() == io::ErrorKind::PermissionDenied => Ok(false),
                Err(e) => Err(e),
            },
            Ok(_) => Ok(false),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl PhotoStore for LocalPhotoStore {
    async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, PhotoStoreError> {
        let path = self.path_for(file_name)?;
        let io_err = |context: &str| {
            let context = format!("{context} {}", path.display());
            move |source| PhotoStoreError::Io { context, source }
        };

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(io_err("Failed to create"))?;
        file.write_all(bytes)
            .await
            .map_err(io_err("Failed to write"))?;
        file.flush().await.map_err(io_err("Failed to flush"))?;

        info!(target: "clients.photos", path = %path.display(), bytes = bytes.len(), "Stored uploaded photo");
        Ok(path)
    }

    async fn remove(&self, file_name: &str) -> Result<bool, PhotoStoreError> {
        let path = self.path_for(file_name)?;
        let io_err = |source| PhotoStoreError::Io {
            context: format!("Failed to remove {}", path.display()),
            source,
        };

        if !Self::readable(&path).await.map_err(io_err)? {
            debug!(target: "clients.photos", path = %path.display(), "No photo to remove");
            return Ok(false);
        }

        match fs::remove_file(&path).await {
            Ok(()) => {
                info!(target: "clients.photos", path = %path.display(), "Removed photo");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_err(e)),
        }
    }

    async fn locate(&self, file_name: &str) -> Result<PathBuf, PhotoStoreError> {
        let path = self.path_for(file_name)?;

        match Self::readable(&path).await {
            Ok(true) => Ok(path),
            Ok(false) => Err(PhotoStoreError::NotFound(file_name.to_string())),
            Err(source) => Err(PhotoStoreError::Io {
                context: format!("Failed to inspect {}", path.display()),
                source,
            }),
        }
    }
}
