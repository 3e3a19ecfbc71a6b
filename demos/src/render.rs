//! Text rendering of a [`Board`].

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};

use crate::board::{Board, CellState};

/// Character used for each cell state in plain output.
pub fn glyph(state: CellState) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Wall => '#',
        CellState::Start => 'S',
        CellState::Goal => 'G',
        CellState::Path => '*',
    }
}

/// Background colour for each cell state in styled output.
fn color(state: CellState) -> CtColor {
    match state {
        CellState::Empty => CtColor::White,
        CellState::Wall => CtColor::Black,
        CellState::Start => CtColor::Green,
        CellState::Goal => CtColor::Red,
        CellState::Path => CtColor::Blue,
    }
}

/// Render the board as rows of glyphs, one line per grid row.
pub fn render_plain(board: &Board) -> String {
    let bounds = board.bounds();
    let mut out = String::with_capacity(bounds.len() + bounds.rows() as usize);
    for cell in bounds.iter() {
        out.push(glyph(board.state_at(cell)));
        if cell.col == bounds.cols() - 1 {
            out.push('\n');
        }
    }
    out
}

/// Write the board to `w` with terminal colours, followed by its status line.
pub fn render_styled(board: &Board, w: &mut impl Write) -> io::Result<()> {
    let bounds = board.bounds();
    for cell in bounds.iter() {
        let state = board.state_at(cell);
        queue!(
            w,
            SetForegroundColor(CtColor::DarkGrey),
            SetBackgroundColor(color(state)),
            Print(glyph(state)),
            Print(glyph(state)),
        )?;
        if cell.col == bounds.cols() - 1 {
            queue!(w, ResetColor, Print('\n'))?;
        }
    }
    queue!(w, Print(board.status()), Print('\n'))?;
    w.flush()
}
