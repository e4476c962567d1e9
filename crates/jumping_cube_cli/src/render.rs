//! Text rendering of board snapshots.

use crossterm::style::{Color as TermColor, Stylize};
use jumping_cube::{BoardSnapshot, CellView, Color, PlayerSlot};

/// How cells are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Owned cells get their player's color as background.
    Ansi,
    /// Owner marked by player number (`1:3` = player one, three points).
    Plain,
}

fn term_color(color: &Color) -> TermColor {
    TermColor::Rgb {
        r: color.r(),
        g: color.g(),
        b: color.b(),
    }
}

/// Dark text on light backgrounds and vice versa.
fn contrasting_text(color: &Color) -> TermColor {
    let luma = 299 * u32::from(color.r()) + 587 * u32::from(color.g()) + 114 * u32::from(color.b());
    if luma > 128_000 {
        TermColor::Black
    } else {
        TermColor::White
    }
}

fn render_cell(snapshot: &BoardSnapshot, cell: &CellView, palette: Palette) -> String {
    match (palette, cell.owner) {
        (Palette::Plain, Some(slot)) => format!("{}:{}", slot.number(), cell.points),
        (Palette::Plain, None) => format!(" .{}", cell.points),
        (Palette::Ansi, Some(slot)) => {
            let color = snapshot.players[slot].color();
            format!(" {} ", cell.points)
                .on(term_color(color))
                .with(contrasting_text(color))
                .to_string()
        }
        (Palette::Ansi, None) => format!(" {} ", cell.points).dark_grey().to_string(),
    }
}

/// Draws the board with row and column labels.
pub fn render_board(snapshot: &BoardSnapshot, palette: Palette) -> String {
    let mut out = String::from("   ");
    for col in 0..snapshot.cols {
        out.push_str(&format!("{col:^3} "));
    }
    out.push('\n');

    for (row, cells) in snapshot.rows_iter().enumerate() {
        out.push_str(&format!("{row:>2} "));
        let rendered: Vec<String> = cells
            .iter()
            .map(|cell| render_cell(snapshot, cell, palette))
            .collect();
        out.push_str(&rendered.join(" "));
        out.push('\n');
    }
    out
}

/// Per-player cell counts, e.g. `Ada: 12  Grace: 9  unowned: 28`.
pub fn render_score(snapshot: &BoardSnapshot) -> String {
    let owned = |slot: PlayerSlot| {
        format!(
            "{}: {}",
            snapshot.players[slot].name(),
            snapshot.counts.owned_by(slot)
        )
    };
    format!(
        "{}  {}  unowned: {}",
        owned(PlayerSlot::One),
        owned(PlayerSlot::Two),
        snapshot.counts.unowned
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use jumping_cube::{BoardSize, GameEngine, Roster};

    #[test]
    fn test_plain_board_layout() {
        let mut engine = GameEngine::with_size(BoardSize::Five, Roster::default());
        engine.apply_move(0, 1);
        let text = render_board(&engine.snapshot(), Palette::Plain);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], " 0  .1 1:2  .1  .1  .1");
        assert!(lines[0].contains('4'));
    }

    #[test]
    fn test_score_line() {
        let mut engine = GameEngine::with_size(BoardSize::Five, Roster::default());
        engine.apply_move(0, 0);
        engine.apply_move(1, 1);
        assert_eq!(
            render_score(&engine.snapshot()),
            "Player 1: 1  Player 2: 1  unowned: 23"
        );
    }

    #[test]
    fn test_ansi_board_shows_points() {
        let mut engine = GameEngine::with_size(BoardSize::Five, Roster::default());
        engine.apply_move(2, 2);
        let text = render_board(&engine.snapshot(), Palette::Ansi);
        assert_eq!(text.lines().count(), 6);
        assert!(text.lines().nth(3).unwrap().contains(" 2 "));
    }
}
