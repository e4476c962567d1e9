//! Terminal front end for the Jumping Cube engine.
//!
//! Loads a [`GameConfig`], drives a [`jumping_cube::GameEngine`] from typed
//! commands or a move script, and renders board snapshots as text.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod render;
pub mod session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig, PlayerConfig};
pub use input::{Input, InputError, parse_script};
pub use render::{Palette, render_board, render_score};
pub use session::{PlaySession, run_replay};
