//! Player entity logic.
//!
//! Players are created once per game with the starting hand; hands only shrink.

use crate::config::game::{PLAYER_COUNT, STARTING_HAND};
use crate::config::scoring::WINNING_SCORE;
use crate::game::types::{Ingredient, Player, Slot};

/// Create both players. Both start on the first track slot; the first cascade
/// separates them.
pub fn spawn_players() -> [Player; PLAYER_COUNT] {
    [
        Player::new(1, Slot::First, STARTING_HAND.to_vec()),
        Player::new(2, Slot::First, STARTING_HAND.to_vec()),
    ]
}

impl Player {
    pub fn has_ingredient(&self, ingredient: Ingredient) -> bool {
        self.hand.contains(&ingredient)
    }

    /// Remove one instance of `ingredient` from the hand.
    /// Returns `false` (hand untouched) if the player does not hold it.
    pub fn take_ingredient(&mut self, ingredient: Ingredient) -> bool {
        match self.hand.iter().position(|&i| i == ingredient) {
            Some(idx) => {
                self.hand.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn is_winner(&self) -> bool {
        self.score >= WINNING_SCORE
    }
}
