//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! Construction only; no domain logic lives here.

use sqlx::SqlitePool;
use std::sync::Arc;

use clients_core::ports::PhotoStore;
use clients_core::services::AppCore;
use clients_core::Repos;

use crate::repositories::SqliteClientRepository;

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(Self::client_repository(pool))
    }

    /// Build a complete `AppCore` instance from a pool and photo store.
    ///
    /// ```ignore
    /// use clients_core::LocalPhotoStore;
    /// use clients_db::{CoreFactory, setup_database};
    ///
    /// let pool = setup_database(&db_path).await?;
    /// let photos = Arc::new(LocalPhotoStore::new(&uploads_dir)?);
    /// let core = CoreFactory::build_app_core(pool, photos);
    /// ```
    pub fn build_app_core(pool: SqlitePool, photos: Arc<dyn PhotoStore>) -> AppCore {
        AppCore::new(Self::build_repos(pool), photos)
    }

    /// Create a client repository from a pool.
    pub fn client_repository(pool: SqlitePool) -> Arc<SqliteClientRepository> {
        Arc::new(SqliteClientRepository::new(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Create a client repository using this test database.
    pub fn client_repository(&self) -> SqliteClientRepository {
        SqliteClientRepository::new(self.pool.clone())
    }
}
