//! Database setup and initialization.
//!
//! Entry points call `setup_database()` with the resolved database path.

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::path::Path;
use tracing::debug;

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// This function:
/// 1. Creates the parent directory of `db_path` if needed
/// 2. Opens the database file, creating it if it doesn't exist
/// 3. Creates the `clients` table
///
/// # Example
///
/// ```rust,no_run
/// use clients_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database(Path::new("/path/to/clients.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await?;

    create_schema(&pool).await?;
    debug!(path = %db_path.display(), "Database ready");

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// The pool holds a single connection so every query sees the same
/// in-memory database.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    use sqlx::sqlite::SqlitePoolOptions;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema.
///
/// Safe to call multiple times as all statements use IF NOT EXISTS.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS clients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            create_at TEXT NOT NULL,
            photo TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn setup_creates_file_and_parent_directory() {
        let temp = tempdir().unwrap();
        let db_path = temp.path().join("nested/data/clients.db");

        let pool = setup_database(&db_path).await.unwrap();

        assert!(db_path.exists());
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn schema_creation_is_idempotent() {
        let pool = setup_test_database().await.unwrap();
        create_schema(&pool).await.unwrap();
        create_schema(&pool).await.unwrap();
    }
}
