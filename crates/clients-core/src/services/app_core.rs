//! `AppCore` - the primary application facade.
//!
//! Adapters receive an `AppCore` instance and use it to access all
//! functionality.

use std::sync::Arc;

use super::ClientService;
use crate::ports::{PhotoStore, Repos};

/// The core application facade.
///
/// Constructed at the adapter's composition root with concrete repository
/// and photo store implementations.
///
/// # Example
///
/// ```ignore
/// let repos = Repos::new(client_repo);
/// let photos = Arc::new(LocalPhotoStore::new("uploads")?);
/// let core = AppCore::new(repos, photos);
///
/// let clients = core.clients().list().await?;
/// ```
pub struct AppCore {
    clients: ClientService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories and photo store.
    pub fn new(repos: Repos, photos: Arc<dyn PhotoStore>) -> Self {
        Self {
            clients: ClientService::new(repos.clients, photos),
        }
    }

    /// Access the client service.
    pub const fn clients(&self) -> &ClientService {
        &self.clients
    }
}
