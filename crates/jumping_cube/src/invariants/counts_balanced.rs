//! Counter invariant: the aggregate counters partition the board and agree
//! with the cells.

use super::Invariant;
use crate::grid::Grid;
use crate::types::PlayerSlot;

/// Invariant: `player_one + player_two + unowned == total`, and each counter
/// equals a fresh recount of the cells.
pub struct CountsBalancedInvariant;

impl Invariant<Grid> for CountsBalancedInvariant {
    fn holds(grid: &Grid) -> bool {
        let counts = grid.counts();
        if !counts.is_balanced() || counts.total != grid.len() {
            return false;
        }

        let owned = |slot| {
            grid.cells()
                .iter()
                .filter(|cell| cell.owner() == Some(slot))
                .count()
        };
        let unowned = grid.cells().iter().filter(|c| c.owner().is_none()).count();

        counts.player_one == owned(PlayerSlot::One)
            && counts.player_two == owned(PlayerSlot::Two)
            && counts.unowned == unowned
    }

    fn description() -> &'static str {
        "Ownership counters partition the board and match the cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::OwnershipCounts;

    #[test]
    fn test_fresh_grid_holds() {
        assert!(CountsBalancedInvariant::holds(&Grid::new(7, 7)));
    }

    #[test]
    fn test_seeded_grid_holds() {
        let mut grid = Grid::new(5, 5);
        grid.seed(0, 0, PlayerSlot::One, 2);
        grid.seed(0, 1, PlayerSlot::Two, 1);
        grid.seed(0, 0, PlayerSlot::Two, 1);
        assert!(CountsBalancedInvariant::holds(&grid));
        assert_eq!(grid.counts().player_two, 2);
    }

    #[test]
    fn test_drifted_counters_violate() {
        let mut grid = Grid::new(5, 5);
        grid.seed(3, 3, PlayerSlot::One, 1);
        // Balanced sum, wrong attribution.
        grid.force_counts(OwnershipCounts {
            total: 25,
            player_one: 0,
            player_two: 1,
            unowned: 24,
        });
        assert!(!CountsBalancedInvariant::holds(&grid));
    }
}
