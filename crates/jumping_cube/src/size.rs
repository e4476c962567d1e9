//! Allowed board sizes.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest allowed row or column count.
pub const MIN_DIMENSION: usize = 5;
/// Largest allowed row or column count.
pub const MAX_DIMENSION: usize = 10;

/// Clamps a requested row or column count into `MIN_DIMENSION..=MAX_DIMENSION`.
///
/// Out-of-range requests are silently pulled to the nearest bound.
#[instrument]
pub fn clamp_dimension(requested: usize) -> usize {
    requested.clamp(MIN_DIMENSION, MAX_DIMENSION)
}

/// The square board sizes offered to players.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum BoardSize {
    /// 5×5.
    Five,
    /// 6×6.
    Six,
    /// 7×7, the default.
    #[default]
    Seven,
    /// 8×8.
    Eight,
    /// 9×9.
    Nine,
    /// 10×10.
    Ten,
}

/// Requested dimension outside the allowed sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display(
    "Board size {} is out of range ({}..={})",
    requested,
    MIN_DIMENSION,
    MAX_DIMENSION
)]
pub struct BoardSizeError {
    /// The rejected dimension.
    pub requested: usize,
}

impl BoardSize {
    /// All sizes, smallest first.
    pub const ALL: [BoardSize; 6] = [
        BoardSize::Five,
        BoardSize::Six,
        BoardSize::Seven,
        BoardSize::Eight,
        BoardSize::Nine,
        BoardSize::Ten,
    ];

    /// Rows (and columns) of this size.
    pub fn dimension(self) -> usize {
        match self {
            BoardSize::Five => 5,
            BoardSize::Six => 6,
            BoardSize::Seven => 7,
            BoardSize::Eight => 8,
            BoardSize::Nine => 9,
            BoardSize::Ten => 10,
        }
    }

    /// Menu label, e.g. `7x7`.
    pub fn label(self) -> String {
        let n = self.dimension();
        format!("{n}x{n}")
    }

    /// Size whose dimension is the clamped request.
    #[instrument]
    pub fn clamped(requested: usize) -> Self {
        let dimension = clamp_dimension(requested);
        Self::ALL
            .into_iter()
            .find(|size| size.dimension() == dimension)
            .unwrap_or_default()
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(requested: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.dimension() == requested)
            .ok_or(BoardSizeError { requested })
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_clamp_dimension() {
        assert_eq!(clamp_dimension(0), 5);
        assert_eq!(clamp_dimension(4), 5);
        assert_eq!(clamp_dimension(5), 5);
        assert_eq!(clamp_dimension(8), 8);
        assert_eq!(clamp_dimension(10), 10);
        assert_eq!(clamp_dimension(42), 10);
    }

    #[test]
    fn test_exactly_six_sizes() {
        let dims: Vec<usize> = BoardSize::iter().map(BoardSize::dimension).collect();
        assert_eq!(dims, vec![5, 6, 7, 8, 9, 10]);
        assert_eq!(BoardSize::default(), BoardSize::Seven);
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(BoardSize::try_from(9), Ok(BoardSize::Nine));
        assert_eq!(
            BoardSize::try_from(11),
            Err(BoardSizeError { requested: 11 })
        );
        assert!(BoardSize::try_from(4).is_err());
    }

    #[test]
    fn test_clamped_size() {
        assert_eq!(BoardSize::clamped(2), BoardSize::Five);
        assert_eq!(BoardSize::clamped(99), BoardSize::Ten);
        assert_eq!(BoardSize::Six.label(), "6x6");
    }
}
