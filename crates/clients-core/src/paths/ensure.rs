//! Directory creation and verification utilities.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use tracing::debug;

use super::error::PathError;

const WRITE_PROBE_NAME: &str = ".clients_write_test";

/// Ensure the provided directory exists and is writable.
///
/// Missing directories (and their parents) are created. An existing path
/// must be a directory.
pub fn ensure_directory(path: &Path) -> Result<(), PathError> {
    if path.as_os_str().is_empty() {
        return Err(PathError::EmptyPath);
    }

    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
    } else {
        fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    }

    verify_writable(path)
}

/// Verify a directory is writable by creating and removing a probe file.
pub fn verify_writable(path: &Path) -> Result<(), PathError> {
    let probe = path.join(WRITE_PROBE_NAME);
    let not_writable = |e: std::io::Error| PathError::NotWritable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&probe)
        .map_err(not_writable)?;
    file.write_all(b"probe").map_err(not_writable)?;
    drop(file);

    if let Err(e) = fs::remove_file(&probe) {
        debug!(path = %probe.display(), error = %e, "Failed to remove write probe");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn auto_create_builds_nested_directories() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("a/b/uploads");

        ensure_directory(&nested).unwrap();

        assert!(nested.is_dir());
        assert!(!nested.join(WRITE_PROBE_NAME).exists());
    }

    #[test]
    fn existing_directory_is_accepted() {
        let temp = tempdir().unwrap();

        ensure_directory(temp.path()).unwrap();

        assert!(!temp.path().join(WRITE_PROBE_NAME).exists());
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(matches!(
            ensure_directory(Path::new("")),
            Err(PathError::EmptyPath)
        ));
    }

    #[test]
    fn file_in_place_of_directory_is_rejected() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("uploads");
        fs::write(&file, b"not a dir").unwrap();

        let err = ensure_directory(&file).unwrap_err();

        assert!(matches!(err, PathError::NotADirectory(_)));
    }
}
