//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Repository traits are minimal and CRUD-focused
//! - The photo store speaks in file names, never in user-supplied paths

pub mod client_repository;
pub mod photo_store;

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

pub use client_repository::ClientRepository;
pub use photo_store::{PhotoStore, PhotoStoreError};

#[cfg(test)]
pub use photo_store::MockPhotoStore;

/// Container for all repository trait objects.
///
/// Lets adapters wire repositories without coupling to concrete
/// implementations. Lives in `clients-core` so that `AppCore` can accept it
/// without depending on `clients-db`.
#[derive(Clone)]
pub struct Repos {
    /// Client repository for CRUD operations on clients.
    pub clients: Arc<dyn ClientRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
        Self { clients }
    }
}

/// Domain-specific errors for repository operations.
///
/// Abstracts away storage implementation details (e.g., sqlx errors) so
/// services can tell "no such record" apart from a data-access failure.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (connectivity, malformed rows, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A constraint was violated (e.g., unique email).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// The kind of database action that failed, used to phrase store errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Query,
    Insert,
    Update,
    Delete,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Query => "query",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        f.write_str(verb)
    }
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// The candidate record failed its declared constraints.
    ///
    /// Holds one message per violating field.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// No record with the requested id exists.
    #[error("{0}")]
    NotFound(String),

    /// The store failed while performing `operation`.
    #[error("Error performing the {operation} in the database")]
    Store {
        operation: StoreOperation,
        #[source]
        source: RepositoryError,
    },

    /// Writing an uploaded photo to the uploads directory failed.
    #[error("Error performing the file upload")]
    Upload(#[source] PhotoStoreError),

    /// Resolving a stored photo failed.
    #[error(transparent)]
    Photo(#[from] PhotoStoreError),
}

impl CoreError {
    /// Wrap a repository error raised while performing `operation`.
    pub fn store(operation: StoreOperation) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::Store { operation, source }
    }
}
