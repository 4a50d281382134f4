//! Path-related error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during path resolution and directory operations.
#[derive(Debug, Error)]
pub enum PathError {
    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    /// A directory is not writable.
    #[error("Directory {path} is not writable: {reason}")]
    NotWritable { path: PathBuf, reason: String },

    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),
}
