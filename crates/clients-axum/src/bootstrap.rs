//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clients_core::services::AppCore;
use clients_core::LocalPhotoStore;
use clients_db::{CoreFactory, setup_database};

/// Front-end origin allowed by default.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:4200";

/// CORS configuration for the web server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::AllowOrigins(vec![DEFAULT_ALLOWED_ORIGIN.to_string()])
    }
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// Directory holding uploaded photos.
    pub uploads_dir: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 8080;

    /// Create config for the given locations with the default port and CORS.
    pub fn new(database_path: impl Into<PathBuf>, uploads_dir: impl Into<PathBuf>) -> Self {
        Self {
            port: Self::DEFAULT_PORT,
            database_path: database_path.into(),
            uploads_dir: uploads_dir.into(),
            cors: CorsConfig::default(),
        }
    }

    /// Set the HTTP port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Replace the CORS configuration.
    #[must_use]
    pub fn with_cors(mut self, cors: CorsConfig) -> Self {
        self.cors = cors;
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

/// Bootstrap the Axum server with all services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "clients.paths",
        database_path = %config.database_path.display(),
        uploads_dir = %config.uploads_dir.display(),
        "Axum bootstrap resolved paths"
    );

    // 1. Create database pool with schema setup
    let pool = setup_database(&config.database_path)
        .await
        .with_context(|| format!("opening database {}", config.database_path.display()))?;

    // 2. Prepare the uploads directory
    let photos = LocalPhotoStore::new(&config.uploads_dir)
        .with_context(|| format!("preparing uploads directory {}", config.uploads_dir.display()))?;

    // 3. Assemble AppCore
    let core = Arc::new(CoreFactory::build_app_core(pool, Arc::new(photos)));

    Ok(AxumContext { core })
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!("clients API listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
