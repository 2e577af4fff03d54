//! Plain-text rendering of a session.

use std::fmt::Write as _;

use twofold_core::{Grid, Position};
use twofold_game::{GameStatus, Session};

const MIN_CELL_WIDTH: usize = 4;

/// Renders the board followed by the score line and, once the game has
/// ended or been won, a status line.
#[must_use]
pub fn render(session: &Session) -> String {
    let mut out = render_grid(session.grid());
    let _ = writeln!(out, "Score: {}  Moves: {}", session.score(), session.moves());
    if let Some(message) = status_message(session) {
        out.push_str(message);
        out.push('\n');
    }
    out
}

#[must_use]
pub fn status_message(session: &Session) -> Option<&'static str> {
    match session.status() {
        GameStatus::Playing => None,
        GameStatus::Won if session.accepts_input() => Some("You win! Keep going."),
        GameStatus::Won => Some("You win!"),
        GameStatus::Over => Some("Game over!"),
    }
}

/// Renders the grid as a boxed table, one row per line.
#[must_use]
pub fn render_grid(grid: &Grid) -> String {
    let cell_width = grid
        .max_tile()
        .map_or(0, |tile| tile.to_string().len())
        .max(MIN_CELL_WIDTH);
    let border = {
        let mut border = String::from("+");
        for _ in 0..grid.width() {
            border.push_str(&"-".repeat(cell_width + 2));
            border.push('+');
        }
        border
    };

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    for y in 0..grid.height() {
        out.push('|');
        for x in 0..grid.width() {
            match grid.get(Position::new(x, y)) {
                Some(tile) => {
                    let _ = write!(out, " {tile:>cell_width$} |");
                }
                None => {
                    let _ = write!(out, " {:cell_width$} |", "");
                }
            }
        }
        out.push('\n');
        out.push_str(&border);
        out.push('\n');
    }
    out
}
