//! Game configuration loaded from TOML.
//!
//! ```toml
//! rows = 8
//! cols = 8
//!
//! [player_one]
//! name = "Ada"
//! color = "green"
//!
//! [player_two]
//! name = "Grace"
//! color = "#ff8800"
//! ```

use derive_getters::Getters;
use derive_more::{Display, Error};
use jumping_cube::{BoardSize, Color, GameEngine, NamedColor, Player, PlayerSlot, Roster};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// One player's configured name and color.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    name: String,
    /// Color of owned cells.
    color: Color,
}

impl PlayerConfig {
    /// Creates a player configuration.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    fn into_player(self) -> Player {
        Player::new(self.name, self.color)
    }
}

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board rows (clamped into 5..=10).
    #[serde(default = "default_dimension")]
    rows: usize,

    /// Board columns (clamped into 5..=10).
    #[serde(default = "default_dimension")]
    cols: usize,

    /// Player one.
    #[serde(default = "default_player_one")]
    player_one: PlayerConfig,

    /// Player two.
    #[serde(default = "default_player_two")]
    player_two: PlayerConfig,
}

#[instrument]
fn default_dimension() -> usize {
    BoardSize::default().dimension()
}

#[instrument]
fn default_player_one() -> PlayerConfig {
    PlayerConfig::new("Player 1", NamedColor::Red.into())
}

#[instrument]
fn default_player_two() -> PlayerConfig {
    PlayerConfig::new("Player 2", NamedColor::Blue.into())
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: default_dimension(),
            cols: default_dimension(),
            player_one: default_player_one(),
            player_two: default_player_two(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(rows = config.rows, cols = config.cols, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces the board dimensions with a square size.
    #[instrument(skip(self))]
    pub fn with_size(mut self, size: BoardSize) -> Self {
        self.rows = size.dimension();
        self.cols = size.dimension();
        self
    }

    /// Configured attributes of `slot`.
    pub fn player(&self, slot: PlayerSlot) -> &PlayerConfig {
        match slot {
            PlayerSlot::One => &self.player_one,
            PlayerSlot::Two => &self.player_two,
        }
    }

    /// Builds a fresh engine from this configuration.
    #[instrument(skip(self), fields(rows = self.rows, cols = self.cols))]
    pub fn build_engine(&self) -> GameEngine {
        let roster = Roster::new(
            self.player_one.clone().into_player(),
            self.player_two.clone().into_player(),
        );
        GameEngine::new(self.rows, self.cols, roster)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
