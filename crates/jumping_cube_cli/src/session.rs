//! Driving a [`GameEngine`] from text input.

use crate::input::{HELP, Input};
use crate::render::{Palette, render_board, render_score};
use anyhow::{Result, bail};
use jumping_cube::{Coord, GameEngine, MoveOutcome};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// An interactive game over a line-oriented reader and writer.
///
/// A won game is announced and immediately replaced by a fresh board of the
/// same size with the same players.
pub struct PlaySession<R, W> {
    engine: GameEngine,
    input: R,
    output: W,
    palette: Palette,
}

impl<R: BufRead, W: Write> PlaySession<R, W> {
    /// Creates a session around `engine`.
    pub fn new(engine: GameEngine, input: R, output: W, palette: Palette) -> Self {
        Self {
            engine,
            input,
            output,
            palette,
        }
    }

    /// The current game.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Consumes the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        info!("Starting interactive session");
        self.show()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            match Input::parse(&line) {
                Ok(None) => continue,
                Ok(Some(Input::Quit)) => break,
                Ok(Some(input)) => self.handle(input)?,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
        Ok(())
    }

    fn handle(&mut self, input: Input) -> Result<()> {
        match input {
            Input::Move(coord) => self.tap(coord),
            Input::Rename(slot, name) => {
                self.engine.rename_player(slot, name);
                self.show()
            }
            Input::Recolor(slot, color) => {
                self.engine.recolor_player(slot, color);
                self.show()
            }
            Input::Resize(size) => {
                self.engine = std::mem::take(&mut self.engine).resize(size);
                self.show()
            }
            Input::New => {
                self.restart();
                self.show()
            }
            Input::Help => Ok(writeln!(self.output, "{HELP}")?),
            Input::Quit => Ok(()),
        }
    }

    fn tap(&mut self, coord: Coord) -> Result<()> {
        if self.engine.grid().index_of(coord).is_none() {
            writeln!(
                self.output,
                "No cell at {} on a {}x{} board",
                coord,
                self.engine.rows(),
                self.engine.cols()
            )?;
            return Ok(());
        }

        match self.engine.apply_move(coord.row, coord.col) {
            MoveOutcome::Rejected(reason) => writeln!(self.output, "{reason}")?,
            MoveOutcome::TurnSwitched(_) => self.show()?,
            MoveOutcome::Won(winner) => {
                self.show()?;
                let name = self.engine.player(winner).name().clone();
                writeln!(self.output, "Winner is {name}!")?;
                self.restart();
                self.show()?;
            }
        }
        Ok(())
    }

    fn restart(&mut self) {
        self.engine = std::mem::take(&mut self.engine).restart();
    }

    fn show(&mut self) -> Result<()> {
        let snapshot = self.engine.snapshot();
        write!(self.output, "{}", render_board(&snapshot, self.palette))?;
        writeln!(self.output, "{}", render_score(&snapshot))?;
        writeln!(self.output, "{}", snapshot.status())?;
        Ok(())
    }
}

/// Applies a move script and writes each outcome followed by the final
/// board, or the final snapshot as JSON.
///
/// Coordinates off the board abort the replay.
#[instrument(skip(engine, output), fields(moves = moves.len()))]
pub fn run_replay<W: Write>(
    engine: &mut GameEngine,
    moves: &[Coord],
    json: bool,
    palette: Palette,
    output: &mut W,
) -> Result<()> {
    for (number, coord) in moves.iter().enumerate() {
        if engine.grid().index_of(*coord).is_none() {
            bail!(
                "Move {} at {} is off the {}x{} board",
                number + 1,
                coord,
                engine.rows(),
                engine.cols()
            );
        }
        let mover = engine.active_player();
        let outcome = engine.apply_move(coord.row, coord.col);
        if !json {
            writeln!(
                output,
                "{:>3}. {} {} -> {}",
                number + 1,
                engine.player(mover).name(),
                coord,
                outcome
            )?;
        }
    }

    let snapshot = engine.snapshot();
    if json {
        writeln!(output, "{}", serde_json::to_string_pretty(&snapshot)?)?;
    } else {
        write!(output, "{}", render_board(&snapshot, palette))?;
        writeln!(output, "{}", render_score(&snapshot))?;
        writeln!(output, "{}", snapshot.status())?;
    }
    Ok(())
}
