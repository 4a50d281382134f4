//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, filesystem, HTTP).
//!
//! # Structure
//!
//! - `client` - Client records and the candidate body used to create/edit them
//! - `page` - Offset pagination types

mod client;
mod page;

pub use client::{Client, ClientForm, NewClient};
pub use page::{CLIENT_PAGE_SIZE, Page, PageRequest};
