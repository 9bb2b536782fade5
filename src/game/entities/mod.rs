//! Game entities module.
//!
//! This module organizes player and track entity logic.

pub mod player;
pub mod track;

pub use player::*;
pub use track::*;
