//! Render-ready views of a game.
//!
//! A [`BoardSnapshot`] is what a front end draws: cell owners and points,
//! the counters, the phase, and both players' current names and colors.

use crate::engine::{GameEngine, GamePhase};
use crate::grid::{Coord, OwnershipCounts};
use crate::types::{PlayerSlot, Roster};
use serde::{Deserialize, Serialize};

/// One cell as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Position.
    pub coord: Coord,
    /// Owner, if captured.
    pub owner: Option<PlayerSlot>,
    /// Point count.
    pub points: u8,
}

/// Point-in-time copy of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Row count.
    pub rows: usize,
    /// Column count.
    pub cols: usize,
    /// Cells in row-major order.
    pub cells: Vec<CellView>,
    /// Ownership counters.
    pub counts: OwnershipCounts,
    /// Turn or result.
    pub phase: GamePhase,
    /// Player names and colors.
    pub players: Roster,
}

impl BoardSnapshot {
    pub(crate) fn capture(engine: &GameEngine) -> Self {
        let grid = engine.grid();
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            cells: grid
                .cells()
                .iter()
                .map(|cell| CellView {
                    coord: cell.coord(),
                    owner: cell.owner(),
                    points: cell.points(),
                })
                .collect(),
            counts: grid.counts(),
            phase: engine.phase(),
            players: engine.roster().clone(),
        }
    }

    /// Cell at `(row, col)`, if on the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellView> {
        (row < self.rows && col < self.cols).then(|| &self.cells[row * self.cols + col])
    }

    /// Cells grouped by row.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(self.cols)
    }

    /// Status line text: whose turn it is, or who won.
    pub fn status(&self) -> String {
        match self.phase {
            GamePhase::AwaitingMove(slot) => format!("On Turn: {}", self.players[slot].name()),
            GamePhase::Won(slot) => format!("Winner is {}!", self.players[slot].name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_mirrors_engine() {
        let mut engine = GameEngine::default();
        engine.apply_move(3, 4);
        let snapshot = engine.snapshot();

        assert_eq!((snapshot.rows, snapshot.cols), (7, 7));
        assert_eq!(snapshot.cells.len(), 49);
        let cell = snapshot.cell(3, 4).unwrap();
        assert_eq!(cell.owner, Some(PlayerSlot::One));
        assert_eq!(cell.points, 2);
        assert_eq!(snapshot.counts.player_one, 1);
        assert_eq!(snapshot.status(), "On Turn: Player 2");
        assert!(snapshot.cell(7, 0).is_none());
        assert_eq!(snapshot.rows_iter().count(), 7);
    }

    #[test]
    fn test_snapshot_is_stable_between_commands() {
        let mut engine = GameEngine::default();
        engine.apply_move(0, 0);
        assert_eq!(engine.snapshot(), engine.snapshot());
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let engine = GameEngine::default();
        let json = serde_json::to_value(engine.snapshot()).unwrap();
        assert_eq!(json["rows"], 7);
        assert_eq!(json["phase"]["AwaitingMove"], "One");
        assert_eq!(json["players"]["players"][0]["color"], "#ff0000");
    }
}
