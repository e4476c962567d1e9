//! The Jumping Cube game engine.
//!
//! [`GameEngine`] owns a [`Grid`] and the two players, enforces turn order,
//! and runs the chain-reaction cascade. Everything is synchronous:
//! [`GameEngine::apply_move`] drains the whole cascade before returning.
//!
//! The cascade is an explicit FIFO work queue rather than recursion. Newly
//! queued captures go to the back, so explosions are processed wave by wave.

use crate::action::{CascadeStats, Move, MoveOutcome};
use crate::contracts::{Contract, MoveContract};
use crate::grid::{Coord, Grid, OwnershipCounts};
use crate::rules;
use crate::size::BoardSize;
use crate::snapshot::BoardSnapshot;
use crate::types::{Color, Player, PlayerSlot, Roster};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, info, instrument};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the named player to tap a cell.
    AwaitingMove(PlayerSlot),
    /// The named player owns the whole board. Terminal.
    Won(PlayerSlot),
}

/// A queued capture-and-increment produced by an explosion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingCapture {
    cell: usize,
    player: PlayerSlot,
}

/// One game of Jumping Cube.
///
/// Engines are independent values; any number can exist side by side.
#[derive(Debug, Clone)]
pub struct GameEngine {
    grid: Grid,
    roster: Roster,
    phase: GamePhase,
    history: Vec<Move>,
    last_cascade: CascadeStats,
}

/// Starts a game with the given board dimensions and players.
///
/// Dimensions outside `5..=10` are clamped.
#[instrument(skip(player_one_name, player_two_name))]
pub fn new_game(
    rows: usize,
    cols: usize,
    player_one_name: &str,
    player_one_color: Color,
    player_two_name: &str,
    player_two_color: Color,
) -> GameEngine {
    GameEngine::new(
        rows,
        cols,
        Roster::new(
            Player::new(player_one_name, player_one_color),
            Player::new(player_two_name, player_two_color),
        ),
    )
}

impl GameEngine {
    /// Creates a game on a fresh `rows`×`cols` grid (clamped), player one to move.
    #[instrument(skip(roster))]
    pub fn new(rows: usize, cols: usize, roster: Roster) -> Self {
        let grid = Grid::new(rows, cols);
        info!(rows = grid.rows(), cols = grid.cols(), "New game");
        Self {
            grid,
            roster,
            phase: GamePhase::AwaitingMove(PlayerSlot::One),
            history: Vec::new(),
            last_cascade: CascadeStats::default(),
        }
    }

    /// Creates a game on one of the standard square boards.
    pub fn with_size(size: BoardSize, roster: Roster) -> Self {
        Self::new(size.dimension(), size.dimension(), roster)
    }

    /// Starts over on a fresh board of the same size, keeping the players.
    #[instrument(skip(self))]
    pub fn restart(self) -> Self {
        Self::new(self.grid.rows(), self.grid.cols(), self.roster)
    }

    /// Starts over on a fresh board of a new size, keeping the players.
    #[instrument(skip(self))]
    pub fn resize(self, size: BoardSize) -> Self {
        Self::with_size(size, self.roster)
    }

    /// Applies a tap at `(row, col)` by the active player.
    ///
    /// Returns [`MoveOutcome::Rejected`] without touching anything if the game
    /// is won or the cell belongs to the opponent. Otherwise the cascade runs
    /// to completion and the turn passes, unless the move captured the whole
    /// board.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    #[instrument(skip(self), fields(player = ?self.active_player()))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> MoveOutcome {
        let index = self.grid.index_at(row, col);
        let coord = Coord::new(row, col);

        if let Err(reason) = MoveContract::pre(self, &coord) {
            debug!(%reason, "Move rejected");
            return MoveOutcome::Rejected(reason);
        }

        let player = self.active_player();
        self.history.push(Move::new(player, coord));

        let outcome = match self.cascade(index, player) {
            Some(winner) => {
                self.phase = GamePhase::Won(winner);
                info!(%winner, moves = self.history.len(), "Game won");
                MoveOutcome::Won(winner)
            }
            None => {
                let next = player.opponent();
                self.phase = GamePhase::AwaitingMove(next);
                info!(%next, "Turn switched");
                MoveOutcome::TurnSwitched(next)
            }
        };

        debug_assert!(
            MoveContract::post(self).is_ok(),
            "Grid invariants violated after move at {coord}"
        );
        outcome
    }

    /// Runs the cascade started by a tap on `origin`; returns the winner if
    /// the board was captured before the queue drained.
    fn cascade(&mut self, origin: usize, player: PlayerSlot) -> Option<PlayerSlot> {
        let mut stats = CascadeStats::default();
        let mut pending = VecDeque::new();

        let mut winner = self.capture(origin, player, &mut pending, &mut stats);
        while winner.is_none() {
            let Some(event) = pending.pop_front() else {
                break;
            };
            stats.record_capture();
            winner = self.capture(event.cell, event.player, &mut pending, &mut stats);
        }

        if winner.is_some() {
            stats.record_discarded(pending.len());
        }
        debug!(
            explosions = stats.explosions(),
            captures = stats.captures(),
            discarded = stats.discarded(),
            "Cascade settled"
        );
        self.last_cascade = stats;
        winner
    }

    /// Claims `cell` for `player` and adds a point. Checks for a win, then
    /// explodes the cell if it went over its threshold.
    fn capture(
        &mut self,
        cell: usize,
        player: PlayerSlot,
        pending: &mut VecDeque<PendingCapture>,
        stats: &mut CascadeStats,
    ) -> Option<PlayerSlot> {
        self.grid.set_owner(cell, player);
        let points = self.grid.add_point(cell);

        if let Some(winner) = rules::check_winner(&self.grid.counts()) {
            return Some(winner);
        }

        let neighbors = *self.grid.cell(cell).neighbors();
        if rules::exceeds_threshold(points, neighbors.count()) {
            self.grid.reset_points(cell);
            stats.record_explosion();
            pending.extend(
                neighbors
                    .iter()
                    .map(|neighbor| PendingCapture { cell: neighbor, player }),
            );
        }
        None
    }

    /// Renames a player in place. Cells keep referring to the same slot.
    #[instrument(skip(self, name))]
    pub fn rename_player(&mut self, slot: PlayerSlot, name: impl Into<String>) {
        let name = name.into();
        debug!(%name, "Renaming player");
        self.roster.get_mut(slot).set_name(name);
    }

    /// Recolors a player in place.
    #[instrument(skip(self))]
    pub fn recolor_player(&mut self, slot: PlayerSlot, color: Color) {
        self.roster.get_mut(slot).set_color(color);
    }

    /// Row count.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Column count.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// The board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Owner of the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn cell_owner(&self, row: usize, col: usize) -> Option<PlayerSlot> {
        self.grid.cell_at(row, col).owner()
    }

    /// Points on the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn cell_points(&self, row: usize, col: usize) -> u8 {
        self.grid.cell_at(row, col).points()
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Player on turn. Once the game is won this is the winner, who moved last.
    pub fn active_player(&self) -> PlayerSlot {
        match self.phase {
            GamePhase::AwaitingMove(slot) | GamePhase::Won(slot) => slot,
        }
    }

    /// The winner, if the game is over.
    pub fn winner(&self) -> Option<PlayerSlot> {
        match self.phase {
            GamePhase::Won(slot) => Some(slot),
            GamePhase::AwaitingMove(_) => None,
        }
    }

    /// Whether the game is over. [`GameEngine::winner`] says who won.
    pub fn is_won(&self) -> bool {
        self.winner().is_some()
    }

    /// Ownership counters.
    pub fn counts(&self) -> OwnershipCounts {
        self.grid.counts()
    }

    /// Cells owned by `slot`.
    pub fn owned_count(&self, slot: PlayerSlot) -> usize {
        self.grid.counts().owned_by(slot)
    }

    /// Cells nobody owns yet.
    pub fn unowned_count(&self) -> usize {
        self.grid.counts().unowned
    }

    /// Display attributes of `slot`.
    pub fn player(&self, slot: PlayerSlot) -> &Player {
        self.roster.get(slot)
    }

    /// Both players.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of accepted moves.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Cascade statistics of the most recent accepted move.
    pub fn last_cascade(&self) -> CascadeStats {
        self.last_cascade
    }

    /// Serializable view of the whole game for rendering.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(self)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::with_size(BoardSize::default(), Roster::default())
    }
}
