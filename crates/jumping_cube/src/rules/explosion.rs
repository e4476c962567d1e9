//! Explosion threshold.

/// A cell explodes once its points exceed its neighbor count.
pub fn exceeds_threshold(points: u8, neighbor_count: usize) -> bool {
    usize::from(points) > neighbor_count
}
