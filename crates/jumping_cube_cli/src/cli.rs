//! Command-line interface for jumping_cube.

use clap::{Parser, Subcommand};
use jumping_cube::BoardSize;
use std::path::PathBuf;

/// Jumping Cube - chain-reaction territory game for two players
#[derive(Parser, Debug)]
#[command(name = "jumping_cube")]
#[command(about = "Two-player chain-reaction grid game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play {
        /// Path to a TOML game configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Square board size (5 to 10), overriding the configuration
        #[arg(short, long, value_parser = parse_board_size)]
        size: Option<BoardSize>,

        /// Draw the board without colors
        #[arg(long)]
        plain: bool,
    },

    /// Apply a scripted sequence of moves and print the result
    Replay {
        /// Moves as "row,col" pairs separated by spaces or semicolons
        #[arg(short, long)]
        moves: String,

        /// Path to a TOML game configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Square board size (5 to 10), overriding the configuration
        #[arg(short, long, value_parser = parse_board_size)]
        size: Option<BoardSize>,

        /// Print the final snapshot as JSON instead of a board
        #[arg(long)]
        json: bool,

        /// Draw the board without colors
        #[arg(long)]
        plain: bool,
    },

    /// List the allowed board sizes
    Sizes,
}

/// Accepts `8` or `8x8`.
fn parse_board_size(value: &str) -> Result<BoardSize, String> {
    let value = value.trim();
    let text = match value.split_once('x') {
        Some((rows, cols)) if rows == cols => rows,
        Some(_) => return Err(format!("Board must be square, got {value:?}")),
        None => value,
    };
    let dimension: usize = text
        .parse()
        .map_err(|_| format!("Invalid board size {value:?}"))?;
    BoardSize::try_from(dimension).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_with_size() {
        let cli = Cli::try_parse_from(["jumping_cube", "play", "--size", "8"]).unwrap();
        match cli.command {
            Command::Play { config, size, plain } => {
                assert_eq!(config, None);
                assert_eq!(size, Some(BoardSize::Eight));
                assert!(!plain);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_size_out_of_range_is_refused() {
        assert!(Cli::try_parse_from(["jumping_cube", "play", "--size", "4"]).is_err());
        assert!(Cli::try_parse_from(["jumping_cube", "play", "--size", "eleven"]).is_err());
    }

    #[test]
    fn test_size_accepts_label() {
        assert_eq!(parse_board_size("6x6"), Ok(BoardSize::Six));
        assert!(parse_board_size("6x7").is_err());
    }

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from([
            "jumping_cube",
            "replay",
            "--moves",
            "0,0 4,4",
            "--json",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Replay { json: true, ref moves, .. } if moves == "0,0 4,4"
        ));
    }
}
