//! Turn loop.
//!
//! Drives a `GameState` turn by turn with choices supplied by a `TurnInput`.
//! Input parsing and range checks belong to the input; the loop only sequences
//! move, placement, cascade and end of turn, and stops the moment a player wins.

use log::{info, warn};

use crate::game::error::CoreError;
use crate::game::state::{CascadeReport, GameState, TurnSummary};
use crate::game::types::Direction;

/// Source of player decisions.
pub trait TurnInput {
    /// Direction for the acting player. `None` means the input is exhausted.
    fn choose_direction(&mut self, state: &GameState, player: usize) -> Option<Direction>;

    /// Index into the acting player's hand, or `None` to skip placing.
    /// Only asked when the hand is not empty.
    fn choose_ingredient(&mut self, state: &GameState, player: usize) -> Option<usize>;

    fn on_rejected(&mut self, _state: &GameState, _error: &CoreError) {}

    fn on_cascade(&mut self, _state: &GameState, _report: &CascadeReport) {}

    fn on_turn_end(&mut self, _state: &GameState, _summary: &TurnSummary) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Winner(usize),
    /// The input ran out before anyone won.
    InputClosed,
}

/// Play until a player wins or the input runs out.
pub fn run_game_loop<I: TurnInput>(state: &mut GameState, input: &mut I) -> GameEnd {
    info!("[Game] game_id={} loop start", state.game_id);

    while let Some(player) = state.current_player() {
        if !play_turn(state, input, player) {
            warn!("[Game] game_id={} input closed on turn {}", state.game_id, state.turn);
            return GameEnd::InputClosed;
        }
    }

    match state.winner() {
        Some(winner) => GameEnd::Winner(winner),
        None => GameEnd::InputClosed,
    }
}

/// One full turn for `player`. Returns `false` if the input ran out.
fn play_turn<I: TurnInput>(state: &mut GameState, input: &mut I, player: usize) -> bool {
    // A rejected move is re-prompted.
    loop {
        let Some(direction) = input.choose_direction(state, player) else {
            return false;
        };
        match state.apply_move(direction) {
            Ok(_) => break,
            Err(e) => input.on_rejected(state, &e),
        }
    }

    if !state.players[player].hand.is_empty() {
        let choice = input.choose_ingredient(state, player);
        if let Some(&ingredient) = choice.and_then(|i| state.players[player].hand.get(i)) {
            // A rejected placement still ends the turn; the player keeps the ingredient.
            match state.apply_ingredient(ingredient).and_then(|_| state.resolve_cascades()) {
                Ok(report) if report.occurred => input.on_cascade(state, &report),
                Ok(_) => {}
                Err(e) => input.on_rejected(state, &e),
            }
        }
    }

    match state.end_turn() {
        Ok(summary) => {
            input.on_turn_end(state, &summary);
            true
        }
        Err(e) => {
            warn!("[Game] game_id={} could not end turn: {}", state.game_id, e);
            false
        }
    }
}
