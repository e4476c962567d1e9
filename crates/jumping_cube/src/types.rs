//! Core domain types for Jumping Cube.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Player identity used for cell ownership.
///
/// Ownership is compared by slot, never by name or color, so two players
/// configured with the same color remain distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerSlot {
    /// Player one (moves first).
    One,
    /// Player two.
    Two,
}

impl PlayerSlot {
    /// Both slots in turn order.
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    /// Returns the opponent slot.
    pub fn opponent(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    /// Index into two-element per-player tables.
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    /// Parses the 1-based player number used by front ends.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(PlayerSlot::One),
            2 => Some(PlayerSlot::Two),
            _ => None,
        }
    }

    /// The 1-based player number.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

impl std::fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Colors with a well-known name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NamedColor {
    /// Pure red.
    Red,
    /// Pure blue.
    Blue,
    /// Pure green.
    Green,
    /// Yellow.
    Yellow,
    /// Orange.
    Orange,
    /// Magenta.
    Magenta,
    /// Cyan.
    Cyan,
    /// White.
    White,
    /// Mid gray.
    Gray,
    /// Black.
    Black,
}

impl NamedColor {
    /// RGB value of this named color.
    pub fn rgb(self) -> Color {
        match self {
            NamedColor::Red => Color::rgb(255, 0, 0),
            NamedColor::Blue => Color::rgb(0, 0, 255),
            NamedColor::Green => Color::rgb(0, 255, 0),
            NamedColor::Yellow => Color::rgb(255, 255, 0),
            NamedColor::Orange => Color::rgb(255, 200, 0),
            NamedColor::Magenta => Color::rgb(255, 0, 255),
            NamedColor::Cyan => Color::rgb(0, 255, 255),
            NamedColor::White => Color::rgb(255, 255, 255),
            NamedColor::Gray => Color::rgb(128, 128, 128),
            NamedColor::Black => Color::rgb(0, 0, 0),
        }
    }
}

/// An RGB color, used only for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Creates a color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Red component.
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Green component.
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Blue component.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Hex form, `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// The palette name for this color, if it has one.
    pub fn name(&self) -> Option<NamedColor> {
        NamedColor::iter().find(|named| named.rgb() == *self)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(named) => write!(f, "{}", named),
            None => write!(f, "{}", self.to_hex()),
        }
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        named.rgb()
    }
}

/// Error returned when a color string is neither a palette name nor `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized color {:?} (expected a color name or #rrggbb)", input)]
pub struct ColorParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Color {
    type Err = ColorParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(named) = NamedColor::from_str(trimmed) {
            return Ok(named.rgb());
        }

        let err = || ColorParseError {
            input: s.to_string(),
        };
        let hex = trimmed.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let component = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16);
        match (component(0..2), component(2..4), component(4..6)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Color::rgb(r, g, b)),
            _ => Err(err()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Display attributes of a player.
///
/// Owned by the engine and mutated in place; cells refer to players by
/// [`PlayerSlot`], so renaming or recoloring never touches the board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Name shown in status lines.
    name: String,
    /// Color of owned cells.
    color: Color,
}

impl Player {
    /// Creates a player.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, color: Color) -> Self {
        Self {
            name: name.as_ref().to_string(),
            color,
        }
    }

    /// Default attributes for a slot: red "Player 1", blue "Player 2".
    pub fn default_for(slot: PlayerSlot) -> Self {
        match slot {
            PlayerSlot::One => Self::new("Player 1", NamedColor::Red.into()),
            PlayerSlot::Two => Self::new("Player 2", NamedColor::Blue.into()),
        }
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

/// The two players of a game, indexed by [`PlayerSlot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: [Player; 2],
}

impl Roster {
    /// Creates a roster from player one and player two.
    pub fn new(one: Player, two: Player) -> Self {
        Self {
            players: [one, two],
        }
    }

    /// Attributes of `slot`.
    pub fn get(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    pub(crate) fn get_mut(&mut self, slot: PlayerSlot) -> &mut Player {
        &mut self.players[slot.index()]
    }

    /// Both players in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerSlot, &Player)> {
        PlayerSlot::ALL.into_iter().zip(self.players.iter())
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(
            Player::default_for(PlayerSlot::One),
            Player::default_for(PlayerSlot::Two),
        )
    }
}

impl std::ops::Index<PlayerSlot> for Roster {
    type Output = Player;

    fn index(&self, slot: PlayerSlot) -> &Player {
        self.get(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for slot in PlayerSlot::ALL {
            assert_ne!(slot.opponent(), slot);
            assert_eq!(slot.opponent().opponent(), slot);
        }
    }

    #[test]
    fn test_slot_numbers() {
        assert_eq!(PlayerSlot::from_number(1), Some(PlayerSlot::One));
        assert_eq!(PlayerSlot::from_number(2), Some(PlayerSlot::Two));
        assert_eq!(PlayerSlot::from_number(3), None);
        assert_eq!(PlayerSlot::Two.number(), 2);
    }

    #[test]
    fn test_parse_named_color() {
        assert_eq!("red".parse::<Color>(), Ok(Color::rgb(255, 0, 0)));
        assert_eq!("  Blue ".parse::<Color>(), Ok(Color::rgb(0, 0, 255)));
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!("#1a2B3c".parse::<Color>(), Ok(Color::rgb(0x1a, 0x2b, 0x3c)));
        assert!("#12345".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
        assert!("purple".parse::<Color>().is_err());
    }

    #[test]
    fn test_hex_color_rejects_signs() {
        assert!("#+f+f+f".parse::<Color>().is_err());
        assert!("#-1-1-1".parse::<Color>().is_err());
        assert!("#ff 0ff".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_display_prefers_name() {
        assert_eq!(Color::rgb(0, 0, 255).to_string(), "blue");
        assert_eq!(Color::rgb(1, 2, 3).to_string(), "#010203");
    }

    #[test]
    fn test_default_players() {
        let one = Player::default_for(PlayerSlot::One);
        assert_eq!(one.name(), "Player 1");
        assert_eq!(*one.color(), Color::from(NamedColor::Red));
        let two = Player::default_for(PlayerSlot::Two);
        assert_eq!(*two.color(), Color::from(NamedColor::Blue));
    }

    #[test]
    fn test_roster_indexing() {
        let roster = Roster::default();
        assert_eq!(roster[PlayerSlot::Two].name(), "Player 2");
        let names: Vec<&str> = roster.iter().map(|(_, p)| p.name().as_str()).collect();
        assert_eq!(names, vec!["Player 1", "Player 2"]);
    }
}
