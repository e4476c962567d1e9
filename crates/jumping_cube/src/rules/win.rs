//! Win detection.

use crate::grid::OwnershipCounts;
use crate::types::PlayerSlot;

/// Whether `slot` owns every cell while the opponent owns none.
pub fn has_won(counts: &OwnershipCounts, slot: PlayerSlot) -> bool {
    counts.owned_by(slot) == counts.total && counts.owned_by(slot.opponent()) == 0
}

/// Returns the player that owns the whole board, if any.
pub fn check_winner(counts: &OwnershipCounts) -> Option<PlayerSlot> {
    PlayerSlot::ALL
        .into_iter()
        .find(|slot| has_won(counts, *slot))
}
