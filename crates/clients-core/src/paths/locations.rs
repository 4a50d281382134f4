//! Database and uploads directory resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::{absolutize, data_root};

/// Environment variable overriding the database file location.
pub const DATABASE_PATH_ENV: &str = "CLIENTS_DATABASE_PATH";

/// Environment variable overriding the uploads directory.
pub const UPLOADS_DIR_ENV: &str = "CLIENTS_UPLOADS_DIR";

/// Default uploads directory, relative to the working directory.
pub const DEFAULT_UPLOADS_DIR: &str = "uploads";

const DATABASE_FILE_NAME: &str = "clients.db";

/// How a path was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    /// The caller passed an explicit path (e.g., CLI flag).
    Explicit,
    /// The path came from environment variables / `.env`.
    EnvVar,
    /// Fallback default.
    Default,
}

/// Resolution result for a configurable location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolution {
    /// The resolved absolute path.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: PathSource,
}

/// Resolve the `SQLite` database file.
///
/// Resolution order:
/// 1. Explicit path provided by caller
/// 2. `CLIENTS_DATABASE_PATH` environment variable
/// 3. `<data root>/data/clients.db` (the `data/` directory is created)
pub fn resolve_database_path(explicit: Option<&Path>) -> Result<PathResolution, PathError> {
    let env_value = env::var(DATABASE_PATH_ENV).ok();
    if let Some(resolution) = resolve_override(explicit, env_value.as_deref())? {
        return Ok(resolution);
    }

    let data_dir = data_root()?.join("data");
    fs::create_dir_all(&data_dir).map_err(|e| PathError::CreateFailed {
        path: data_dir.clone(),
        reason: e.to_string(),
    })?;

    Ok(PathResolution {
        path: data_dir.join(DATABASE_FILE_NAME),
        source: PathSource::Default,
    })
}

/// Resolve the uploads directory.
///
/// Resolution order:
/// 1. Explicit path provided by caller
/// 2. `CLIENTS_UPLOADS_DIR` environment variable
/// 3. `./uploads` under the current working directory
pub fn resolve_uploads_dir(explicit: Option<&Path>) -> Result<PathResolution, PathError> {
    let env_value = env::var(UPLOADS_DIR_ENV).ok();
    if let Some(resolution) = resolve_override(explicit, env_value.as_deref())? {
        return Ok(resolution);
    }

    Ok(PathResolution {
        path: absolutize(Path::new(DEFAULT_UPLOADS_DIR))?,
        source: PathSource::Default,
    })
}

/// Pick an explicit or environment override, if either is set.
fn resolve_override(
    explicit: Option<&Path>,
    env_value: Option<&str>,
) -> Result<Option<PathResolution>, PathError> {
    if let Some(path) = explicit {
        return Ok(Some(PathResolution {
            path: absolutize(path)?,
            source: PathSource::Explicit,
        }));
    }

    match env_value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(Some(PathResolution {
            path: absolutize(Path::new(value))?,
            source: PathSource::EnvVar,
        })),
        _ => Ok(None),
    }
}
