//! Platform-specific data root resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable overriding the data root.
pub(super) const DATA_DIR_ENV: &str = "CLIENTS_DATA_DIR";

const APP_DIR_NAME: &str = "clients-api";

/// Get the root directory for application data (database).
///
/// Resolution order:
/// 1. `CLIENTS_DATA_DIR` environment variable (highest priority)
/// 2. System data directory (e.g., `~/.local/share/clients-api`)
/// 3. The current working directory
pub fn data_root() -> Result<PathBuf, PathError> {
    if let Ok(path) = env::var(DATA_DIR_ENV) {
        if !path.trim().is_empty() {
            return absolutize(Path::new(&path));
        }
    }

    let root = match dirs::data_local_dir() {
        Some(dir) => dir.join(APP_DIR_NAME),
        None => current_dir()?,
    };

    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }

    Ok(root)
}

/// Make `path` absolute against the current working directory.
///
/// Expands a leading `~` to the home directory.
pub(super) fn absolutize(path: &Path) -> Result<PathBuf, PathError> {
    if path.as_os_str().is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(current_dir()?.join(expanded))
    }
}

fn current_dir() -> Result<PathBuf, PathError> {
    env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))
}
