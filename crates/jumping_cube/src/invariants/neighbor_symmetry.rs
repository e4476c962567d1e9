//! Neighbor links are symmetric: A's east is B iff B's west is A.

use super::Invariant;
use crate::grid::Grid;

/// Invariant: every neighbor link has a matching link back.
pub struct NeighborSymmetryInvariant;

impl Invariant<Grid> for NeighborSymmetryInvariant {
    fn holds(grid: &Grid) -> bool {
        grid.cells().iter().enumerate().all(|(index, cell)| {
            let n = cell.neighbors();
            let back = |other: Option<usize>, pick: fn(&crate::grid::Neighbors) -> Option<usize>| {
                other.is_none_or(|o| pick(grid.cell(o).neighbors()) == Some(index))
            };
            back(n.north, |m| m.south)
                && back(n.south, |m| m.north)
                && back(n.east, |m| m.west)
                && back(n.west, |m| m.east)
        })
    }

    fn description() -> &'static str {
        "Neighbor links are symmetric"
    }
}
