//! Contract-based validation for Jumping Cube moves.
//!
//! Preconditions decide whether a tap is legal; postconditions re-check the
//! grid invariants after the cascade has settled.

use crate::action::Rejection;
use crate::engine::{GameEngine, GamePhase};
use crate::grid::Coord;
use crate::invariants::{GridInvariants, InvariantSet, InvariantViolation};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Error produced when the precondition fails.
    type Refusal;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Refusal>;

    /// Checks postconditions after applying the action.
    fn post(after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: nobody has won yet.
pub struct GameInProgress;

impl GameInProgress {
    /// Refuses moves once the game is won.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), Rejection> {
        match engine.phase() {
            GamePhase::AwaitingMove(_) => Ok(()),
            GamePhase::Won(_) => Err(Rejection::GameOver),
        }
    }
}

/// Precondition: the cell is unowned or already owned by the active player.
pub struct CellClaimable;

impl CellClaimable {
    /// Refuses taps on the opponent's cells.
    #[instrument(skip(engine))]
    pub fn check(coord: &Coord, engine: &GameEngine) -> Result<(), Rejection> {
        let active = engine.active_player();
        match engine.grid().cell_at(coord.row, coord.col).owner() {
            Some(owner) if owner != active => Err(Rejection::OwnedByOpponent(owner)),
            _ => Ok(()),
        }
    }
}

/// Contract for taps.
///
/// Preconditions:
/// - The game is not won
/// - The cell is claimable by the active player
///
/// Postconditions:
/// - Every grid invariant holds
pub struct MoveContract;

impl Contract<GameEngine, Coord> for MoveContract {
    type Refusal = Rejection;

    fn pre(engine: &GameEngine, coord: &Coord) -> Result<(), Rejection> {
        GameInProgress::check(engine)?;
        CellClaimable::check(coord, engine)?;
        Ok(())
    }

    fn post(after: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
        GridInvariants::check_all(after.grid()).inspect_err(|violations| {
            for violation in violations {
                warn!(description = %violation.description, "Grid invariant violated");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::MoveOutcome;
    use crate::types::PlayerSlot;

    #[test]
    fn test_precondition_unowned_cell() {
        let engine = GameEngine::default();
        assert!(MoveContract::pre(&engine, &Coord::new(3, 3)).is_ok());
    }

    #[test]
    fn test_precondition_opponent_cell() {
        let mut engine = GameEngine::default();
        engine.apply_move(0, 0);
        assert_eq!(
            MoveContract::pre(&engine, &Coord::new(0, 0)),
            Err(Rejection::OwnedByOpponent(PlayerSlot::One))
        );
    }

    #[test]
    fn test_precondition_own_cell() {
        let mut engine = GameEngine::default();
        engine.apply_move(0, 0);
        engine.apply_move(4, 4);
        assert_eq!(engine.active_player(), PlayerSlot::One);
        assert!(MoveContract::pre(&engine, &Coord::new(0, 0)).is_ok());
    }

    #[test]
    fn test_precondition_game_over() {
        let mut engine = GameEngine::new(5, 5, Default::default());
        for row in 0..5 {
            for col in 0..5 {
                engine.grid_mut().seed(row, col, PlayerSlot::One, 1);
            }
        }
        assert_eq!(engine.apply_move(2, 2), MoveOutcome::Won(PlayerSlot::One));
        assert_eq!(
            MoveContract::pre(&engine, &Coord::new(1, 1)),
            Err(Rejection::GameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut engine = GameEngine::default();
        engine.apply_move(3, 3);
        assert!(MoveContract::post(&engine).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let mut engine = GameEngine::default();
        engine.apply_move(3, 3);
        engine.grid_mut().force_points(0, 0, 2);
        assert!(MoveContract::post(&engine).is_err());
    }
}
