//! Column scoring.
//!
//! Counts how many cells of a column hold the ingredient found at a given cell
//! and, past the explosion threshold, credits that count to every player.
//! Nothing in the turn flow calls this; `GameState::apply_column_award` exposes it.

use log::info;
use serde::Serialize;

use crate::config::scoring::EXPLOSION_THRESHOLD;
use crate::game::grid::IngredientGrid;
use crate::game::types::{Ingredient, Player, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnAward {
    pub ingredient: Ingredient,
    pub column: usize,
    /// Points credited to each player.
    pub count: usize,
}

/// Award for the ingredient at (`row`, `column`), if its column reaches the threshold.
pub fn column_award(grid: &IngredientGrid, column: usize, row: usize) -> Option<ColumnAward> {
    let ingredient = grid.get(Position::new(row, column))?;
    let count = grid.count_in_column(column, ingredient);
    (count >= EXPLOSION_THRESHOLD).then_some(ColumnAward { ingredient, column, count })
}

pub fn apply_award(players: &mut [Player], award: &ColumnAward) {
    let points = u32::try_from(award.count).unwrap_or(u32::MAX);
    for player in players.iter_mut() {
        player.add_score(points);
    }
    info!(
        "[Scoring] column {} holds {} x {}; every player gains {}",
        award.column, award.count, award.ingredient, points
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::spawn_players;

    fn column_grid(column: usize, matches: usize) -> IngredientGrid {
        let mut grid = IngredientGrid::filled(5, Ingredient::Sugar);
        for row in 0..matches {
            grid.set(Position::new(row, column), Ingredient::Cherry);
        }
        grid
    }

    #[test]
    fn test_below_threshold_awards_nothing() {
        let grid = column_grid(1, EXPLOSION_THRESHOLD - 1);
        assert_eq!(column_award(&grid, 1, 0), None);
    }

    #[test]
    fn test_award_counts_whole_column() {
        let grid = column_grid(3, 4);
        let award = column_award(&grid, 3, 2).expect("award");
        assert_eq!(award, ColumnAward { ingredient: Ingredient::Cherry, column: 3, count: 4 });
    }

    #[test]
    fn test_award_goes_to_every_player() {
        let grid = column_grid(0, 3);
        let mut players = spawn_players();
        let award = column_award(&grid, 0, 0).expect("award");
        apply_award(&mut players, &award);
        assert!(players.iter().all(|p| p.score == 3));
    }

    #[test]
    fn test_out_of_bounds_cell() {
        let grid = column_grid(0, 5);
        assert_eq!(column_award(&grid, 0, 9), None);
    }
}
