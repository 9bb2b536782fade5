//! Track movement system.
//!
//! This module handles moving a slot one step along the shared track.

use crate::game::entities::TrackPositions;
use crate::game::error::CoreError;
use crate::game::types::{Direction, Slot};

/// Move the given slot one step in `direction`.
/// Returns the new position, or `OutOfBoundsMove` with the track untouched.
pub fn move_along_track(track: &mut TrackPositions, slot: Slot, direction: Direction) -> Result<usize, CoreError> {
    let new_pos = track.target(slot, direction)?;
    track.set(slot, new_pos);
    Ok(new_pos)
}
