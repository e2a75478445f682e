//! Drawing recipes
//!
//! One function per asset kind. Each takes a [`Variation`](crate::variation::Variation)
//! (plus an rng for the few kinds with cosmetic randomness, and a flag for
//! kinds with a sub-variant) and returns a freshly drawn canvas of the kind's
//! fixed size. Recipes never touch the filesystem.

pub mod characters;
pub mod furniture;
pub mod icons;
pub mod tiles;
pub mod ui;
