//! Game configuration constants.
//!
//! This module defines the board dimensions and the hand every player is dealt.

use crate::game::types::Ingredient;

/// Number of rows and columns of the (square) ingredient grid.
/// Also the length of the shared track.
pub const BOARD_SIZE: usize = 5;

/// Number of players. The slot toggle only makes sense for two.
pub const PLAYER_COUNT: usize = 2;

/// Ingredients dealt to each player at game start. Never replenished.
pub const STARTING_HAND: [Ingredient; 3] = [Ingredient::Apple, Ingredient::Lemon, Ingredient::Cherry];
