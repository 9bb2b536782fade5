//! Game rendering (terminal).
//!
//! Plain-text board and player summaries for the console demo.

use std::fmt::Write;

use crate::game::state::GameState;
use crate::game::types::Player;

/// Board, track positions and scores, as shown before each turn.
pub fn render_board(state: &GameState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "**********BOARD**********");
    for row in state.grid.rows() {
        let line: Vec<&str> = row.iter().map(|cell| cell.symbol()).collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }
    for (i, player) in state.players.iter().enumerate() {
        let pos = state.track_position(i).unwrap_or_default();
        let _ = writeln!(out, "Player {}'s Position: {} ({:?} slot)", player.id, pos, player.slot);
    }
    for player in &state.players {
        let _ = writeln!(out, "Player {}'s Score: {}", player.id, player.score);
    }
    out
}

/// Numbered hand, 1-based as the prompt expects.
pub fn render_hand(player: &Player) -> String {
    player
        .hand
        .iter()
        .enumerate()
        .map(|(i, ingredient)| format!("{}: {}", i + 1, ingredient))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::{spawn_players, TrackPositions};
    use crate::game::grid::IngredientGrid;
    use crate::game::types::Ingredient;

    #[test]
    fn test_render_board_lists_grid_and_players() {
        let state = GameState::new(
            IngredientGrid::filled(5, Ingredient::Cherry),
            TrackPositions::new(5),
            spawn_players(),
        );
        let board = render_board(&state);
        assert_eq!(board.lines().filter(|l| *l == "Ch Ch Ch Ch Ch").count(), 5);
        assert!(board.contains("Player 2's Position: 0 (First slot)"));
        assert!(board.contains("Player 1's Score: 0"));
    }

    #[test]
    fn test_render_hand_is_one_based() {
        let players = spawn_players();
        assert_eq!(render_hand(&players[0]), "1: Apple  2: Lemon  3: Cherry");
    }
}
