//! Ingredient grid module.

pub mod grid;

pub use grid::*;
