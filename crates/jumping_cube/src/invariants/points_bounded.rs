//! Points invariant: every cell holds between 1 and `neighbor_count + 1`.
//!
//! The upper bound is `neighbor_count + 1` rather than `neighbor_count`
//! because a win stops the cascade before the last captured cell explodes.

use super::Invariant;
use crate::grid::Grid;

/// Invariant: `1 <= points <= neighbor_count + 1` for every cell.
pub struct PointsBoundedInvariant;

impl Invariant<Grid> for PointsBoundedInvariant {
    fn holds(grid: &Grid) -> bool {
        grid.cells().iter().all(|cell| {
            let points = usize::from(cell.points());
            (1..=cell.neighbor_count() + 1).contains(&points)
        })
    }

    fn description() -> &'static str {
        "Cell points stay within 1..=neighbor_count + 1"
    }
}
