//! Turn arbitration after a cascade.
//!
//! The player held responsible for a cascade is inferred from the track: the
//! second player when both players' track positions coincide, the first
//! otherwise. Only that player's slot is toggled. The same check, run again on
//! the new slots, picks the player who acts next.

use log::{debug, info};

use crate::config::game::PLAYER_COUNT;
use crate::game::entities::TrackPositions;
use crate::game::types::{Player, Slot};

/// `1` when both players stand on the same track position, `0` otherwise.
/// Players sharing a slot always coincide.
pub fn coincidence_index(players: &[Player; PLAYER_COUNT], track: &TrackPositions) -> usize {
    let [first, second] = players;
    if track.position(first.slot) == track.position(second.slot) { 1 } else { 0 }
}

/// Exclusive-or toggle over a slot pair: only `toggled` flips, `partner` is read.
/// Returns whether the pair is exclusive afterwards.
pub fn toggle_possession(toggled: &mut Slot, partner: Slot) -> bool {
    *toggled = toggled.toggled();
    *toggled != partner
}

/// Toggle the causer's slot after a cascade and return the slot that acts next.
/// The player acting next is `coincidence_index` over the updated slots.
pub fn redirect(players: &mut [Player; PLAYER_COUNT], track: &TrackPositions) -> Slot {
    let causer = coincidence_index(players, track);
    let partner = players[PLAYER_COUNT - 1 - causer].slot;
    let exclusive = toggle_possession(&mut players[causer].slot, partner);

    let acting = coincidence_index(players, track);
    let slot = players[acting].slot;
    info!(
        "[Arbiter] cascade caused by player {}; player {} holds {:?} and plays again",
        players[causer].id, players[acting].id, slot
    );
    if !exclusive {
        debug!("[Arbiter] both players now hold {:?}", slot);
    }
    slot
}
