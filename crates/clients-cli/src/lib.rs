#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod commands;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use commands::{Commands, ServeArgs};
pub use parser::Cli;
