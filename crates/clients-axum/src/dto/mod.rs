//! Data Transfer Objects (DTOs) for HTTP API contract.
//!
//! These types define the success response bodies. Error bodies live in
//! [`crate::error`].

pub mod clients;

pub use clients::{ClientMessage, MessageBody, UploadResponse};
