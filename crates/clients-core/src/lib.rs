#![doc = include_str!("../README.md")]

pub mod domain;
pub mod paths;
pub mod photos;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{CLIENT_PAGE_SIZE, Client, ClientForm, NewClient, Page, PageRequest};
pub use photos::{LocalPhotoStore, unique_photo_name, validate_photo_name};
pub use ports::{
    ClientRepository, CoreError, PhotoStore, PhotoStoreError, Repos, RepositoryError,
    StoreOperation,
};
pub use services::{AppCore, ClientService, PhotoUpload, PhotoUploaded};

// Re-export path utilities
pub use paths::{
    PathError, PathResolution, PathSource, ResolvedPaths, data_root,
    ensure_directory, resolve_database_path, resolve_uploads_dir, verify_writable,
};
