//! `SQLite` implementation of the `ClientRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use clients_core::{Client, ClientRepository, NewClient, Page, PageRequest, RepositoryError};

use super::row_mappers::{CLIENT_SELECT_COLUMNS, DATE_FORMAT, row_to_client, storage_error};

/// `SQLite` implementation of the `ClientRepository` trait.
///
/// Rows are always returned in ascending `id` order.
pub struct SqliteClientRepository {
    pool: SqlitePool,
}

impl SqliteClientRepository {
    /// Create a new `SQLite` client repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for SqliteClientRepository {
    async fn list(&self) -> Result<Vec<Client>, RepositoryError> {
        let query = format!("SELECT {CLIENT_SELECT_COLUMNS} FROM clients ORDER BY id");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter().map(row_to_client).collect()
    }

    async fn list_page(&self, request: PageRequest) -> Result<Page<Client>, RepositoryError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)?;

        let offset = i64::try_from(request.offset())
            .map_err(|_| RepositoryError::Storage(format!("Page {} is out of range", request.number)))?;

        let query =
            format!("SELECT {CLIENT_SELECT_COLUMNS} FROM clients ORDER BY id LIMIT ? OFFSET ?");
        let rows = sqlx::query(&query)
            .bind(i64::from(request.size))
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        let content = rows.iter().map(row_to_client).collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(content, request, total.unsigned_abs()))
    }

    async fn get_by_id(&self, id: i64) -> Result<Client, RepositoryError> {
        let query = format!("SELECT {CLIENT_SELECT_COLUMNS} FROM clients WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Client with ID {id}")))?;

        row_to_client(&row)
    }

    async fn insert(&self, client: &NewClient) -> Result<Client, RepositoryError> {
        let create_at = client.create_at.format(DATE_FORMAT).to_string();

        let result = sqlx::query(
            "INSERT INTO clients (name, last_name, email, create_at, photo) VALUES (?, ?, ?, ?, NULL)",
        )
        .bind(&client.name)
        .bind(&client.last_name)
        .bind(&client.email)
        .bind(&create_at)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(Client {
            id: result.last_insert_rowid(),
            name: client.name.clone(),
            last_name: client.last_name.clone(),
            email: client.email.clone(),
            create_at: client.create_at,
            photo: None,
        })
    }

    async fn update(&self, client: &Client) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE clients SET name = ?, last_name = ?, email = ?, create_at = ?, photo = ? WHERE id = ?",
        )
        .bind(&client.name)
        .bind(&client.last_name)
        .bind(&client.email)
        .bind(client.create_at.format(DATE_FORMAT).to_string())
        .bind(&client.photo)
        .bind(client.id)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Client with ID {}",
                client.id
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Client with ID {id}")));
        }

        Ok(())
    }
}
