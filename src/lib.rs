//! Two-player ingredient grid game.
//!
//! Players walk a shared track, place ingredients on the diagonal cell their
//! track position addresses, and set off cascades that can hand out extra turns.
//! `game::state::GameState` is the entry point; `game::game_loop` drives it.

pub mod config;
pub mod game;

pub use game::error::CoreError;
pub use game::game_loop::{run_game_loop, GameEnd, TurnInput};
pub use game::state::{CascadeReport, GameState, TurnSummary};
pub use game::types::{Direction, Ingredient, Player, Position, Slot, TurnPhase};
