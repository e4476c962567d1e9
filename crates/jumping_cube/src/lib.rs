//! Jumping Cube game logic.
//!
//! Two players take turns tapping cells on a rectangular grid. A tap claims
//! the cell and adds a point; a cell whose points exceed its neighbor count
//! explodes, dropping back to one point and pushing a point into every
//! neighbor, which the mover captures. Explosions chain. Whoever owns every
//! cell wins.
//!
//! # Architecture
//!
//! - **Grid**: cell arena, neighbor topology, ownership counters
//! - **Engine**: turn order, the cascade, win detection, player attributes
//! - **Contracts / invariants**: move legality and grid consistency checks
//! - **Snapshot**: serializable view for front ends
//!
//! # Example
//!
//! ```
//! use jumping_cube::{GameEngine, MoveOutcome, PlayerSlot};
//!
//! let mut game = GameEngine::default();
//! assert_eq!(game.apply_move(3, 3), MoveOutcome::TurnSwitched(PlayerSlot::Two));
//! assert_eq!(game.cell_owner(3, 3), Some(PlayerSlot::One));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod grid;
pub mod invariants;
pub mod rules;
mod size;
mod snapshot;
mod types;

// Crate-level exports - Player identity
pub use types::{Color, ColorParseError, NamedColor, Player, PlayerSlot, Roster};

// Crate-level exports - Board
pub use grid::{Cell, Coord, Grid, GridError, Neighbors, OwnershipCounts};
pub use size::{BoardSize, BoardSizeError, MAX_DIMENSION, MIN_DIMENSION, clamp_dimension};

// Crate-level exports - Engine
pub use action::{CascadeStats, Move, MoveOutcome, Rejection};
pub use contracts::{CellClaimable, Contract, GameInProgress, MoveContract};
pub use engine::{GameEngine, GamePhase, new_game};
pub use snapshot::{BoardSnapshot, CellView};
