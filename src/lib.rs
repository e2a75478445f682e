//! Housegen - procedural pixel-art assets for the house game
//!
//! Draws floor and wall tiles, furniture, character sheets, UI chrome and
//! icons, and writes them as PNGs into the directory the game loads from.

// Drawing
pub mod canvas;
pub mod recipes;
pub mod variation;

// Batch
pub mod catalog;
pub mod config;
pub mod error;
pub mod runner;

pub use canvas::{Canvas, Color};
pub use catalog::{AssetDescriptor, AssetGroup, AssetKind, Catalog};
pub use config::GeneratorConfig;
pub use error::{GenerateError, Result};
pub use runner::{BatchReport, BatchRunner};
pub use variation::Variation;
