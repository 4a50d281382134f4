//! Resolve every location in one call for CLI introspection.

use std::fmt;
use std::path::{Path, PathBuf};

use super::{PathError, PathSource, resolve_database_path, resolve_uploads_dir};

/// All resolved paths captured in a single struct.
///
/// Backs the `clients paths` command and lets the server log exactly
/// where it reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root directory for application data.
    ///
    /// Only set when the database lives at its default location under it.
    pub data_root: Option<PathBuf>,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// How the database path was resolved.
    pub database_source: PathSource,
    /// Directory holding uploaded photos.
    pub uploads_dir: PathBuf,
    /// How the uploads directory was resolved.
    pub uploads_source: PathSource,
}

impl ResolvedPaths {
    /// Resolve all paths using the current environment.
    pub fn resolve() -> Result<Self, PathError> {
        Self::resolve_with(None, None)
    }

    /// Resolve with optional explicit overrides, as passed on the command line.
    pub fn resolve_with(
        database: Option<&Path>,
        uploads_dir: Option<&Path>,
    ) -> Result<Self, PathError> {
        let database = resolve_database_path(database)?;
        let uploads = resolve_uploads_dir(uploads_dir)?;

        // Default layout is `<data root>/data/clients.db`.
        let data_root = match database.source {
            PathSource::Default => database
                .path
                .parent()
                .and_then(Path::parent)
                .map(Path::to_path_buf),
            PathSource::Explicit | PathSource::EnvVar => None,
        };

        Ok(Self {
            data_root,
            database_path: database.path,
            database_source: database.source,
            uploads_dir: uploads.path,
            uploads_source: uploads.source,
        })
    }
}

impl fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data_root {
            Some(root) => writeln!(f, "data_root = {}", root.display())?,
            None => writeln!(f, "data_root = (unused)")?,
        }
        writeln!(f, "database_path = {}", self.database_path.display())?;
        writeln!(f, "database_source = {:?}", self.database_source)?;
        writeln!(f, "uploads_dir = {}", self.uploads_dir.display())?;
        write!(f, "uploads_source = {:?}", self.uploads_source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn explicit_overrides_are_reported_as_explicit() {
        let temp = tempdir().unwrap();
        let db = temp.path().join("clients.db");
        let uploads = temp.path().join("uploads");

        let paths = ResolvedPaths::resolve_with(Some(&db), Some(&uploads)).unwrap();

        assert_eq!(paths.database_path, db);
        assert_eq!(paths.database_source, PathSource::Explicit);
        assert_eq!(paths.data_root, None);
        assert_eq!(paths.uploads_dir, uploads);
        assert_eq!(paths.uploads_source, PathSource::Explicit);
    }

    #[test]
    fn display_lists_key_value_pairs() {
        let temp = tempdir().unwrap();
        let db = temp.path().join("clients.db");
        let uploads = temp.path().join("uploads");
        let output = ResolvedPaths::resolve_with(Some(&db), Some(&uploads))
            .unwrap()
            .to_string();

        assert!(output.contains("data_root = (unused)"));
        assert!(output.contains("database_path = "));
        assert!(output.contains("uploads_source = Explicit"));
    }
}
