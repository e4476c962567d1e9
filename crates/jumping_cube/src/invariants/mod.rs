//! First-class invariants for Jumping Cube grids.
//!
//! Invariants are logical properties that hold between moves. They are
//! checked after every accepted move in debug builds and can be tested
//! independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        check_one::<S, I4>(state, &mut violations);
        into_result(violations)
    }
}

pub mod counts_balanced;
pub mod neighbor_symmetry;
pub mod points_bounded;
pub mod unowned_single_point;

pub use counts_balanced::CountsBalancedInvariant;
pub use neighbor_symmetry::NeighborSymmetryInvariant;
pub use points_bounded::PointsBoundedInvariant;
pub use unowned_single_point::UnownedSinglePointInvariant;

/// All grid invariants as a composable set.
pub type GridInvariants = (
    CountsBalancedInvariant,
    PointsBoundedInvariant,
    UnownedSinglePointInvariant,
    NeighborSymmetryInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::types::PlayerSlot;

    #[test]
    fn test_invariant_set_holds_for_fresh_grid() {
        for n in 5..=10 {
            assert!(GridInvariants::check_all(&Grid::new(n, n)).is_ok());
        }
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        let mut grid = Grid::new(5, 5);
        grid.force_points(0, 0, 9);
        grid.force_points(1, 1, 3);

        let violations = GridInvariants::check_all(&grid).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, PointsBoundedInvariant::description());
        assert_eq!(
            violations[1].description,
            UnownedSinglePointInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let mut grid = Grid::new(5, 5);
        grid.seed(2, 2, PlayerSlot::Two, 3);

        type TwoInvariants = (CountsBalancedInvariant, NeighborSymmetryInvariant);
        assert!(TwoInvariants::check_all(&grid).is_ok());
    }
}
