//! Parsing of typed commands and move scripts.

use derive_more::{Display, Error};
use jumping_cube::{BoardSize, Color, Coord, PlayerSlot};
use tracing::instrument;

/// A line typed at the `play` prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Tap a cell.
    Move(Coord),
    /// Change a player's name.
    Rename(PlayerSlot, String),
    /// Change a player's color.
    Recolor(PlayerSlot, Color),
    /// Start over on a new board size.
    Resize(BoardSize),
    /// Start over on the same board.
    New,
    /// Show the command list.
    Help,
    /// Leave.
    Quit,
}

/// Text that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{}", message)]
pub struct InputError {
    /// What went wrong.
    pub message: String,
}

impl InputError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  <row> <col>            tap a cell (0-indexed)
  rename <1|2> <name>    rename a player
  color <1|2> <color>    recolor a player (name or #rrggbb)
  size <5..10>           new game on an N x N board
  new                    new game on the current board
  help                   show this list
  quit                   leave";

fn parse_slot(word: Option<&str>) -> Result<PlayerSlot, InputError> {
    word.and_then(|w| w.parse::<u8>().ok())
        .and_then(PlayerSlot::from_number)
        .ok_or_else(|| InputError::new("Expected player 1 or 2"))
}

fn parse_index(word: &str, what: &str) -> Result<usize, InputError> {
    word.parse()
        .map_err(|_| InputError::new(format!("Invalid {what}: {word:?}")))
}

impl Input {
    /// Parses one prompt line. Blank lines yield `None`.
    #[instrument]
    pub fn parse(line: &str) -> Result<Option<Self>, InputError> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(None);
        };

        let input = match first.to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" => Input::Quit,
            "help" | "?" => Input::Help,
            "new" => Input::New,
            "rename" => {
                let slot = parse_slot(words.next())?;
                let name = words.by_ref().collect::<Vec<_>>().join(" ");
                if name.is_empty() {
                    return Err(InputError::new("Expected a name"));
                }
                Input::Rename(slot, name)
            }
            "color" | "colour" => {
                let slot = parse_slot(words.next())?;
                let text = words
                    .next()
                    .ok_or_else(|| InputError::new("Expected a color"))?;
                let color = text
                    .parse()
                    .map_err(|e: jumping_cube::ColorParseError| InputError::new(e.to_string()))?;
                Input::Recolor(slot, color)
            }
            "size" => {
                let word = words
                    .next()
                    .ok_or_else(|| InputError::new("Expected a board size"))?;
                let size = BoardSize::try_from(parse_index(word, "size")?)
                    .map_err(|e| InputError::new(e.to_string()))?;
                Input::Resize(size)
            }
            _ => {
                let row = parse_index(first, "row")?;
                let col = words
                    .next()
                    .ok_or_else(|| InputError::new("Expected a column"))
                    .and_then(|w| parse_index(w, "column"))?;
                Input::Move(Coord::new(row, col))
            }
        };

        if let Some(extra) = words.next() {
            return Err(InputError::new(format!("Unexpected {extra:?}")));
        }
        Ok(Some(input))
    }
}

/// Parses a move script such as `"0,0 4,4 0,0"` (whitespace or `;`
/// between moves, a comma between row and column).
#[instrument]
pub fn parse_script(script: &str) -> Result<Vec<Coord>, InputError> {
    script
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|token| !token.is_empty())
        .map(|token| {
            let (row, col) = token
                .split_once(',')
                .ok_or_else(|| InputError::new(format!("Expected row,col but got {token:?}")))?;
            Ok(Coord::new(
                parse_index(row.trim(), "row")?,
                parse_index(col.trim(), "column")?,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(Input::parse("2 3"), Ok(Some(Input::Move(Coord::new(2, 3)))));
        assert_eq!(Input::parse("   "), Ok(None));
        assert!(Input::parse("2").is_err());
        assert!(Input::parse("2 x").is_err());
        assert!(Input::parse("1 2 3").is_err());
    }

    #[test]
    fn test_parse_rename_keeps_spaces() {
        assert_eq!(
            Input::parse("rename 2 Grace Hopper"),
            Ok(Some(Input::Rename(PlayerSlot::Two, "Grace Hopper".into())))
        );
        assert!(Input::parse("rename 3 Bob").is_err());
        assert!(Input::parse("rename 1").is_err());
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(
            Input::parse("color 1 #00ff00"),
            Ok(Some(Input::Recolor(PlayerSlot::One, Color::rgb(0, 255, 0))))
        );
        assert!(Input::parse("color 1 plaid").is_err());
    }

    #[test]
    fn test_parse_size_is_strict() {
        assert_eq!(
            Input::parse("size 6"),
            Ok(Some(Input::Resize(BoardSize::Six)))
        );
        assert!(Input::parse("size 11").is_err());
        assert!(Input::parse("size").is_err());
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Input::parse("QUIT"), Ok(Some(Input::Quit)));
        assert_eq!(Input::parse("new"), Ok(Some(Input::New)));
        assert_eq!(Input::parse("help"), Ok(Some(Input::Help)));
    }

    #[test]
    fn test_parse_script() {
        assert_eq!(
            parse_script("0,0 4,4;\n1,2"),
            Ok(vec![Coord::new(0, 0), Coord::new(4, 4), Coord::new(1, 2)])
        );
        assert_eq!(parse_script(""), Ok(vec![]));
        assert!(parse_script("0;0").is_err());
    }
}
