//! Ingredient placement system.
//!
//! Validates a player's ingredient against their hand and the diagonal cell their
//! slot addresses, then consumes the ingredient and marks the cell for the cascade.

use log::debug;

use crate::game::entities::TrackPositions;
use crate::game::error::CoreError;
use crate::game::grid::IngredientGrid;
use crate::game::types::{Ingredient, Player, Position};

/// Place `ingredient` from the player's hand onto their addressed cell.
///
/// On success one instance leaves the hand and the cell becomes the transient
/// marker. On failure neither the grid nor the hand is touched.
/// Score and track position are never changed here.
pub fn place_ingredient(
    grid: &mut IngredientGrid,
    track: &TrackPositions,
    player: &mut Player,
    ingredient: Ingredient,
) -> Result<Position, CoreError> {
    if !player.has_ingredient(ingredient) {
        return Err(CoreError::InvalidIngredientInHand(ingredient));
    }

    let cell = track.addressed_cell(player.slot);
    match grid.get(cell) {
        Some(found) if found == ingredient => {}
        found => {
            return Err(CoreError::IngredientCellMismatch {
                cell,
                expected: ingredient,
                found,
            });
        }
    }

    player.take_ingredient(ingredient);
    grid.set(cell, Ingredient::StarAnise);
    debug!("[Placement] player={} placed {} at {}", player.id, ingredient, cell);
    Ok(cell)
}
