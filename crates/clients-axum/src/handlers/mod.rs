//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to the `ClientService`.

pub mod clients;
pub mod uploads;
