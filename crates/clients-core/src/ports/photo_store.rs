//! Photo store trait definition.
//!
//! The photo store is a flat namespace of files (the uploads directory).
//! Every method takes a bare file name; implementations must refuse names
//! that would escape the store.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by photo store operations.
#[derive(Debug, Error)]
pub enum PhotoStoreError {
    /// The name is empty or contains path segments.
    #[error("Invalid photo name: {0}")]
    InvalidName(String),

    /// No readable file with this name exists.
    #[error("Error, could not load the image: {0}")]
    NotFound(String),

    /// Underlying filesystem failure.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

/// Storage for uploaded client photos.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoStore: Send + Sync {
    /// Write `bytes` under `file_name`, returning the absolute path written.
    ///
    /// Fails if a file with that name already exists.
    async fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, PhotoStoreError>;

    /// Delete `file_name` if it exists and is readable.
    ///
    /// Returns whether a file was removed. A missing file is not an error.
    async fn remove(&self, file_name: &str) -> Result<bool, PhotoStoreError>;

    /// Resolve `file_name` to the absolute path of a readable file.
    ///
    /// Returns `PhotoStoreError::NotFound` when the file is missing or
    /// unreadable.
    async fn locate(&self, file_name: &str) -> Result<PathBuf, PhotoStoreError>;
}
