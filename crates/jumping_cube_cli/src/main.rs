//! Jumping Cube - terminal game
//!
//! Play interactively or replay a scripted game.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use jumping_cube::BoardSize;
use jumping_cube_cli::{
    Cli, Command, GameConfig, Palette, PlaySession, parse_script, run_replay,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            size,
            plain,
        } => run_play(config, size, plain),
        Command::Replay {
            moves,
            config,
            size,
            json,
            plain,
        } => run_script(&moves, config, size, json, plain),
        Command::Sizes => list_sizes(),
    }
}

/// Loads configuration and applies the board size override.
fn load_config(path: Option<&Path>, size: Option<BoardSize>) -> Result<GameConfig> {
    let config = GameConfig::load(path).context("Could not load game configuration")?;
    Ok(match size {
        Some(size) => config.with_size(size),
        None => config,
    })
}

fn palette(plain: bool) -> Palette {
    if plain { Palette::Plain } else { Palette::Ansi }
}

/// Run the interactive game
#[instrument]
fn run_play(config: Option<PathBuf>, size: Option<BoardSize>, plain: bool) -> Result<()> {
    let config = load_config(config.as_deref(), size)?;
    info!(rows = *config.rows(), cols = *config.cols(), "Starting game");

    let stdin = io::stdin();
    let mut session = PlaySession::new(
        config.build_engine(),
        stdin.lock(),
        io::stdout(),
        palette(plain),
    );
    session.run()
}

/// Replay a move script
#[instrument(skip(moves))]
fn run_script(
    moves: &str,
    config: Option<PathBuf>,
    size: Option<BoardSize>,
    json: bool,
    plain: bool,
) -> Result<()> {
    let moves = parse_script(moves).context("Could not parse move script")?;
    let config = load_config(config.as_deref(), size)?;
    let mut engine = config.build_engine();

    let mut stdout = io::stdout().lock();
    run_replay(&mut engine, &moves, json, palette(plain), &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// List the allowed board sizes
fn list_sizes() -> Result<()> {
    let mut stdout = io::stdout().lock();
    for size in BoardSize::ALL {
        let marker = if size == BoardSize::default() {
            " (default)"
        } else {
            ""
        };
        writeln!(stdout, "{}{}", size.label(), marker)?;
    }
    Ok(())
}
