//! Shared one-dimensional track.
//!
//! The track holds one scalar position per slot, not per player. A player finds
//! their position through the slot they currently hold, so toggling a player's
//! slot moves them to the other position. Players sharing a slot move together.

use serde::{Serialize, Deserialize};

use crate::game::error::CoreError;
use crate::game::types::{Direction, Position, Slot};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackPositions {
    positions: [usize; 2],
    len: usize,
}

impl TrackPositions {
    /// First slot starts at the left end, second slot at the right end.
    pub fn new(len: usize) -> Self {
        Self {
            positions: [0, len.saturating_sub(1)],
            len,
        }
    }

    pub fn with_positions(len: usize, first: usize, second: usize) -> Option<Self> {
        (first < len && second < len).then_some(Self { positions: [first, second], len })
    }

    pub fn position(&self, slot: Slot) -> usize {
        self.positions[slot.index()]
    }

    /// Diagonal cell addressed by the slot's position.
    pub fn addressed_cell(&self, slot: Slot) -> Position {
        Position::diagonal(self.position(slot))
    }

    /// Position one step away from the slot's current one, if it stays on the track.
    pub fn target(&self, slot: Slot, direction: Direction) -> Result<usize, CoreError> {
        let from = self.position(slot);
        let to = match direction {
            Direction::Left => from.checked_sub(1),
            Direction::Right => Some(from + 1).filter(|&p| p < self.len),
        };
        to.ok_or(CoreError::OutOfBoundsMove { from, direction })
    }

    pub fn set(&mut self, slot: Slot, pos: usize) {
        if pos < self.len {
            self.positions[slot.index()] = pos;
        }
    }
}
