//! Path utilities for the clients API data locations.
//!
//! This module provides the canonical path resolution for all components:
//! - Database location
//! - Uploads directory
//! - Application data root
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O
//! - Each location resolves as: explicit override, then environment
//!   variable, then default

mod ensure;
mod error;
mod locations;
mod platform;
mod resolver;

// Error type
pub use error::PathError;

// Platform roots
pub use platform::data_root;

// Database and uploads
pub use locations::{
    DATABASE_PATH_ENV, DEFAULT_UPLOADS_DIR, PathResolution, PathSource, UPLOADS_DIR_ENV,
    resolve_database_path, resolve_uploads_dir,
};

// Directory operations
pub use ensure::{ensure_directory, verify_writable};

// Resolver for CLI introspection
pub use resolver::ResolvedPaths;
