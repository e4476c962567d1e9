//! Moves and their outcomes.
//!
//! An illegal move is not an error: it comes back as
//! [`MoveOutcome::Rejected`] and the front end simply asks again.

use crate::grid::Coord;
use crate::types::PlayerSlot;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// An accepted move: a player tapping a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who moved.
    pub player: PlayerSlot,
    /// The tapped cell.
    pub coord: Coord,
}

impl Move {
    /// Creates a move record.
    pub fn new(player: PlayerSlot, coord: Coord) -> Self {
        Self { player, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord)
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The game already has a winner.
    #[display("Game is already over")]
    GameOver,
    /// The cell belongs to the player who is not on turn.
    #[display("Cell is owned by {}", _0)]
    OwnedByOpponent(PlayerSlot),
}

/// Result of [`GameEngine::apply_move`](crate::GameEngine::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Nothing changed.
    Rejected(Rejection),
    /// The move was applied and the named player is now on turn.
    TurnSwitched(PlayerSlot),
    /// The move captured the whole board.
    Won(PlayerSlot),
}

impl MoveOutcome {
    /// Whether the move changed the board.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Rejected(reason) => write!(f, "Rejected: {}", reason),
            MoveOutcome::TurnSwitched(next) => write!(f, "{} to move", next),
            MoveOutcome::Won(winner) => write!(f, "{} wins", winner),
        }
    }
}

/// Work done by the cascade of a single move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct CascadeStats {
    /// Cells that exploded, counting repeats.
    explosions: usize,
    /// Queued capture events processed.
    captures: usize,
    /// Capture events still queued when a win cut the cascade short.
    discarded: usize,
}

impl CascadeStats {
    pub(crate) fn record_explosion(&mut self) {
        self.explosions += 1;
    }

    pub(crate) fn record_capture(&mut self) {
        self.captures += 1;
    }

    pub(crate) fn record_discarded(&mut self, pending: usize) {
        self.discarded = pending;
    }

    /// Total point increments: the tapped cell plus every capture.
    pub fn steps(&self) -> usize {
        self.captures + 1
    }
}
