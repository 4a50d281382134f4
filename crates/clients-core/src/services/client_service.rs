//! Client service - orchestrates client CRUD and photo association.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{CLIENT_PAGE_SIZE, Client, ClientForm, Page, PageRequest};
use crate::photos::unique_photo_name;
use crate::ports::{ClientRepository, CoreError, PhotoStore, RepositoryError, StoreOperation};

/// A photo received from a caller, not yet stored.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    /// File name as supplied by the caller.
    pub original_name: String,
    pub bytes: Vec<u8>,
}

/// Outcome of a successful photo upload.
#[derive(Debug, Clone)]
pub struct PhotoUploaded {
    /// The client with its `photo` set to `file_name`.
    pub client: Client,
    /// Stored name of the new photo.
    pub file_name: String,
}

/// Service for client operations.
///
/// Keeps the stored `photo` names and the files in the photo store in step:
/// replacing or deleting a client's photo removes the old file.
///
/// Update and upload read the record and then write it back without a
/// transaction; concurrent writers to the same id can overwrite each other.
pub struct ClientService {
    repo: Arc<dyn ClientRepository>,
    photos: Arc<dyn PhotoStore>,
}

impl ClientService {
    /// Create a new client service.
    pub fn new(repo: Arc<dyn ClientRepository>, photos: Arc<dyn PhotoStore>) -> Self {
        Self { repo, photos }
    }

    /// List all clients in ascending id order.
    pub async fn list(&self) -> Result<Vec<Client>, CoreError> {
        self.repo
            .list()
            .await
            .map_err(CoreError::store(StoreOperation::Query))
    }

    /// Fetch one zero-based page of [`CLIENT_PAGE_SIZE`] clients.
    pub async fn list_page(&self, number: u32) -> Result<Page<Client>, CoreError> {
        self.repo
            .list_page(PageRequest::of(number, CLIENT_PAGE_SIZE))
            .await
            .map_err(CoreError::store(StoreOperation::Query))
    }

    /// Get a client by id, or `None` if no such client exists.
    pub async fn find(&self, id: i64) -> Result<Option<Client>, CoreError> {
        match self.repo.get_by_id(id).await {
            Ok(client) => Ok(Some(client)),
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(CoreError::store(StoreOperation::Query)(e)),
        }
    }

    /// Get a client by id. Returns `CoreError::NotFound` if absent.
    pub async fn get(&self, id: i64) -> Result<Client, CoreError> {
        self.find(id).await?.ok_or_else(|| {
            CoreError::NotFound(format!("Client ID: {id} does not exist in the database."))
        })
    }

    /// Validate and store a new client.
    pub async fn create(&self, form: ClientForm) -> Result<Client, CoreError> {
        let candidate = form.validated().map_err(CoreError::Validation)?;
        let client = self
            .repo
            .insert(&candidate)
            .await
            .map_err(CoreError::store(StoreOperation::Insert))?;

        info!(client_id = client.id, "Created client");
        Ok(client)
    }

    /// Validate the form and overwrite the editable fields of client `id`.
    ///
    /// The stored `photo` is never changed here.
    pub async fn update(&self, id: i64, form: ClientForm) -> Result<Client, CoreError> {
        let details = form.validated().map_err(CoreError::Validation)?;
        let mut client = self.find(id).await?.ok_or_else(|| {
            CoreError::NotFound(format!(
                "Error: could not be edited, client ID: {id} does not exist in the database."
            ))
        })?;

        client.apply(details);
        self.repo
            .update(&client)
            .await
            .map_err(CoreError::store(StoreOperation::Update))?;

        info!(client_id = id, "Updated client");
        Ok(client)
    }

    /// Delete client `id` and its photo file. Returns the removed client.
    pub async fn delete(&self, id: i64) -> Result<Client, CoreError> {
        let client = self.find(id).await?.ok_or_else(|| {
            CoreError::NotFound(format!(
                "Error: could not be deleted, client ID: {id} does not exist in the database."
            ))
        })?;

        if let Some(photo) = client.photo_name() {
            self.discard_photo(photo).await;
        }

        self.repo
            .delete(id)
            .await
            .map_err(CoreError::store(StoreOperation::Delete))?;

        info!(client_id = id, "Deleted client");
        Ok(client)
    }

    /// Store a new photo for client `id`, replacing any previous one.
    ///
    /// Returns `Ok(None)` without touching anything when the upload is empty.
    pub async fn upload_photo(
        &self,
        id: i64,
        upload: PhotoUpload,
    ) -> Result<Option<PhotoUploaded>, CoreError> {
        let mut client = self.find(id).await?.ok_or_else(|| {
            CoreError::NotFound(format!(
                "Error: could not upload the photo, client ID: {id} does not exist in the database."
            ))
        })?;

        if upload.bytes.is_empty() {
            return Ok(None);
        }

        let file_name = unique_photo_name(&upload.original_name);
        self.photos
            .save(&file_name, &upload.bytes)
            .await
            .map_err(CoreError::Upload)?;

        let previous = client.photo.replace(file_name.clone());
        if let Err(e) = self.repo.update(&client).await {
            self.discard_photo(&file_name).await;
            return Err(CoreError::store(StoreOperation::Update)(e));
        }

        if let Some(old) = previous.as_deref().filter(|name| !name.is_empty()) {
            self.discard_photo(old).await;
        }

        info!(client_id = id, file_name = %file_name, "Uploaded client photo");
        Ok(Some(PhotoUploaded { client, file_name }))
    }

    /// Resolve a stored photo to a readable file path.
    pub async fn locate_photo(&self, name: &str) -> Result<PathBuf, CoreError> {
        let path = self.photos.locate(name).await?;
        info!(target: "clients.photos", path = %path.display(), "Serving photo");
        Ok(path)
    }

    /// Best-effort removal; failures are logged, never returned.
    async fn discard_photo(&self, name: &str) {
        if let Err(e) = self.photos.remove(name).await {
            warn!(target: "clients.photos", photo = name, error = %e, "Failed to remove photo");
        }
    }
}
