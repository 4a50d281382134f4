//! Subcommand definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),

    /// Show resolved paths for the database and uploads directory
    Paths,
}

/// Options for `clients serve`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, env = "CLIENTS_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Path to the SQLite database file (defaults to CLIENTS_DATABASE_PATH or the data directory)
    #[arg(long = "database")]
    pub database: Option<PathBuf>,

    /// Directory for uploaded photos (defaults to CLIENTS_UPLOADS_DIR or ./uploads)
    #[arg(long = "uploads-dir")]
    pub uploads_dir: Option<PathBuf>,

    /// Origin allowed to make cross-origin requests (repeatable)
    #[arg(
        long = "allowed-origin",
        env = "CLIENTS_ALLOWED_ORIGINS",
        value_delimiter = ',',
        conflicts_with = "allow_any_origin"
    )]
    pub allowed_origins: Vec<String>,

    /// Allow cross-origin requests from any origin
    #[arg(long)]
    pub allow_any_origin: bool,
}
