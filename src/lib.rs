//! Crustal Wars - deterministic pixel-art avatar generator
//!
//! This library provides functionality to:
//! - Select avatar traits from a hex seed (e.g. a blockchain hash) or at random
//! - Compose species, pattern, eye, and accessory layers on a 32x32 grid
//! - Export avatars as nearest-neighbor scaled PNG images
//!
//! ```
//! use crustal::generator::AvatarGenerator;
//!
//! let avatar = AvatarGenerator::new().generate_from_seed("0x7f3a9c21be04");
//! assert_eq!(avatar.image.dimensions(), (256, 256));
//! ```

pub mod batch;
pub mod catalog;
pub mod cli;
pub mod color;
pub mod config;
pub mod generator;
pub mod grid;
pub mod models;
pub mod output;
pub mod selector;
pub mod species;
pub mod suggest;
pub mod terminal;

#[cfg(feature = "wasm")]
pub mod wasm;
