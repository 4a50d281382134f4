//! Row mapping helpers for `SQLite` queries.

use chrono::NaiveDate;
use clients_core::{Client, RepositoryError};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT column list for client queries.
pub const CLIENT_SELECT_COLUMNS: &str = "id, name, last_name, email, create_at, photo";

/// Storage format of the `create_at` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Map any `sqlx` failure to a storage error, surfacing unique-key
/// violations as constraint errors.
pub fn storage_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::Constraint(db.message().to_string())
        }
        _ => RepositoryError::Storage(err.to_string()),
    }
}

/// Parse a database row into a Client.
pub fn row_to_client(row: &SqliteRow) -> Result<Client, RepositoryError> {
    let create_at: String = row.try_get("create_at").map_err(storage_error)?;
    let create_at = NaiveDate::parse_from_str(&create_at, DATE_FORMAT).map_err(|e| {
        RepositoryError::Storage(format!("Invalid create_at value '{create_at}': {e}"))
    })?;

    Ok(Client {
        id: row.try_get("id").map_err(storage_error)?,
        name: row.try_get("name").map_err(storage_error)?,
        last_name: row.try_get("last_name").map_err(storage_error)?,
        email: row.try_get("email").map_err(storage_error)?,
        create_at,
        photo: row.try_get("photo").map_err(storage_error)?,
    })
}
