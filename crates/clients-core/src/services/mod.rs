//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete implementations.

mod app_core;
mod client_service;

pub use app_core::AppCore;
pub use client_service::{ClientService, PhotoUpload, PhotoUploaded};
