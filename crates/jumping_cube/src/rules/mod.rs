//! Game rules for Jumping Cube.
//!
//! Pure functions over counters and point values, kept apart from the grid
//! and the cascade so contracts and invariants can reuse them.

pub mod explosion;
pub mod win;

pub use explosion::exceeds_threshold;
pub use win::{check_winner, has_won};
