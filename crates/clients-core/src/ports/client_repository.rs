//! Client repository trait definition.
//!
//! This port defines the interface for client persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Client, NewClient, Page, PageRequest};

/// Repository for client persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - CRUD-only: list, page, get, insert, update, delete
/// - Photo file side effects belong in `ClientService`, not here
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// List every client in store order.
    async fn list(&self) -> Result<Vec<Client>, RepositoryError>;

    /// Fetch one page of clients.
    ///
    /// A page past the end is returned empty, not as an error.
    async fn list_page(&self, request: PageRequest) -> Result<Page<Client>, RepositoryError>;

    /// Get a client by its id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the client doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Client, RepositoryError>;

    /// Insert a new client.
    ///
    /// Returns the persisted client with its assigned id.
    async fn insert(&self, client: &NewClient) -> Result<Client, RepositoryError>;

    /// Overwrite every column of an existing client, photo included.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the client doesn't exist.
    async fn update(&self, client: &Client) -> Result<(), RepositoryError>;

    /// Delete a client by its id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the client doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
