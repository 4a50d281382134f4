//! Photo file naming and the local filesystem photo store.

mod local;

use std::path::{Component, Path};

use uuid::Uuid;

use crate::ports::PhotoStoreError;

pub use local::LocalPhotoStore;

const FALLBACK_PHOTO_NAME: &str = "photo";

/// Build a collision-free stored name for an uploaded file.
///
/// The result is `<uuid>_<original>`, where `<original>` is the final
/// component of the client-supplied name with all spaces removed. Any
/// directory part of the supplied name is discarded.
pub fn unique_photo_name(original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .replace(' ', "");

    let base = match base.as_str() {
        "" | "." | ".." => FALLBACK_PHOTO_NAME,
        other => other,
    };

    format!("{}_{}", Uuid::new_v4(), base)
}

/// Check that `name` is a single plain file name.
///
/// Rejects empty names, separators, `.` and `..`, and anything else that
/// would resolve outside the uploads directory.
pub fn validate_photo_name(name: &str) -> Result<&str, PhotoStoreError> {
    let invalid = || PhotoStoreError::InvalidName(name.to_string());

    if name.is_empty() || name.contains(['/', '\\', '\0']) {
        return Err(invalid());
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(name),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_name_prefixes_uuid_and_strips_spaces() {
        let name = unique_photo_name("my photo 1.png");
        let (prefix, rest) = name.split_once('_').unwrap();

        assert!(Uuid::parse_str(prefix).is_ok());
        assert_eq!(rest, "myphoto1.png");
    }

    #[test]
    fn unique_name_drops_directory_parts() {
        let name = unique_photo_name("../../etc/pass wd");
        assert!(name.ends_with("_passwd"));
        assert!(validate_photo_name(&name).is_ok());

        let name = unique_photo_name("C:\\Users\\me\\face.jpg");
        assert!(name.ends_with("_face.jpg"));
    }

    #[test]
    fn unique_name_falls_back_when_nothing_remains() {
        assert!(unique_photo_name("   ").ends_with("_photo"));
        assert!(unique_photo_name("dir/").ends_with("_photo"));
        assert!(unique_photo_name("..").ends_with("_photo"));
    }

    #[test]
    fn unique_names_differ_for_the_same_upload() {
        assert_ne!(unique_photo_name("a.png"), unique_photo_name("a.png"));
    }

    #[test]
    fn plain_names_are_valid() {
        assert_eq!(validate_photo_name("abc_photo.png").unwrap(), "abc_photo.png");
        assert!(validate_photo_name("no-extension").is_ok());
    }

    #[test]
    fn traversal_and_separators_are_rejected() {
        for name in ["", ".", "..", "../secret", "a/b.png", "a\\b.png", "/etc/passwd"] {
            assert!(
                matches!(validate_photo_name(name), Err(PhotoStoreError::InvalidName(_))),
                "{name:?} should be rejected"
            );
        }
    }
}
