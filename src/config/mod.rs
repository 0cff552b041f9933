//! Configuration module for the avatar generator
//!
//! Provides types and parsing for `crustal.toml` project configuration.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
