//! Unowned cells never accumulate points.

use super::Invariant;
use crate::grid::Grid;

/// Invariant: a cell without an owner has exactly one point.
pub struct UnownedSinglePointInvariant;

impl Invariant<Grid> for UnownedSinglePointInvariant {
    fn holds(grid: &Grid) -> bool {
        grid.cells()
            .iter()
            .filter(|cell| cell.owner().is_none())
            .all(|cell| cell.points() == 1)
    }

    fn description() -> &'static str {
        "Unowned cells hold exactly one point"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_grid_holds() {
        assert!(UnownedSinglePointInvariant::holds(&Grid::new(10, 10)));
    }

    #[test]
    fn test_unowned_with_points_violates() {
        let mut grid = Grid::new(5, 5);
        grid.force_points(4, 0, 2);
        assert!(!UnownedSinglePointInvariant::holds(&grid));
    }
}
