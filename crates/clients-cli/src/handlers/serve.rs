//! Serve command handler.

use anyhow::Result;
use tracing::info;

use clients_axum::{CorsConfig, ServerConfig, start_server};
use clients_core::paths::ResolvedPaths;

use crate::commands::ServeArgs;

/// Execute the serve command.
///
/// Resolves the database and uploads locations, then runs the HTTP server
/// until it fails.
pub async fn execute(args: ServeArgs) -> Result<()> {
    let paths = ResolvedPaths::resolve_with(args.database.as_deref(), args.uploads_dir.as_deref())?;
    info!(
        target: "clients.paths",
        database_source = ?paths.database_source,
        uploads_source = ?paths.uploads_source,
        "Resolved storage locations"
    );

    let config = ServerConfig::new(paths.database_path, paths.uploads_dir)
        .with_port(args.port)
        .with_cors(cors_config(&args));

    start_server(config).await
}

fn cors_config(args: &ServeArgs) -> CorsConfig {
    if args.allow_any_origin {
        CorsConfig::AllowAll
    } else if args.allowed_origins.is_empty() {
        CorsConfig::default()
    } else {
        CorsConfig::AllowOrigins(args.allowed_origins.clone())
    }
}
