//! Errors returned by the game core.
//!
//! Every variant is recoverable: the rejected action leaves the state
//! untouched and the caller is expected to prompt again.

use crate::game::types::{Direction, Ingredient, Position, TurnPhase};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("{0} is not in the player's hand")]
    InvalidIngredientInHand(Ingredient),

    /// `found` is `None` when the addressed cell lies off the grid.
    #[error("cell {cell} holds {}, not {expected}", describe_cell(.found))]
    IngredientCellMismatch {
        cell: Position,
        expected: Ingredient,
        found: Option<Ingredient>,
    },

    #[error("cannot move {direction:?} from track position {from}")]
    OutOfBoundsMove { from: usize, direction: Direction },

    #[error("action not allowed during the {actual} phase (expected {expected})")]
    OutOfPhase { expected: TurnPhase, actual: TurnPhase },

    #[error("the game is already over")]
    GameOver,
}

fn describe_cell(found: &Option<Ingredient>) -> String {
    found.map_or_else(|| "nothing".to_string(), |i| i.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_display() {
        let err = CoreError::IngredientCellMismatch {
            cell: Position::new(2, 2),
            expected: Ingredient::Apple,
            found: Some(Ingredient::Water),
        };
        assert_eq!(err.to_string(), "cell (2, 2) holds Water, not Apple");
    }

    #[test]
    fn test_mismatch_display_off_grid() {
        let err = CoreError::IngredientCellMismatch {
            cell: Position::new(6, 6),
            expected: Ingredient::Lemon,
            found: None,
        };
        assert_eq!(err.to_string(), "cell (6, 6) holds nothing, not Lemon");
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = CoreError::OutOfBoundsMove { from: 0, direction: Direction::Left };
        assert_eq!(err.to_string(), "cannot move Left from track position 0");
    }
}
