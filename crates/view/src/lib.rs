//! TextView: maps a core `Board` into bordered text.
//!
//! This crate is pure (no I/O). It can be unit-tested.
//!
//! Rows are printed top row first so the output reads the way the playfield
//! stands: `|` borders each row, filled cells are marked, and a dash border
//! closes the bottom.

use quadwell_core::Board;

/// A lightweight text renderer for the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextView {
    /// Glyph for an occupied cell
    pub filled: char,
    /// Glyph for an empty cell
    pub empty: char,
}

impl Default for TextView {
    fn default() -> Self {
        Self {
            filled: '+',
            empty: ' ',
        }
    }
}

impl TextView {
    pub fn new(filled: char, empty: char) -> Self {
        Self { filled, empty }
    }

    /// Render the board into a fresh string, top row first.
    pub fn render(&self, board: &Board) -> String {
        let width = board.width();
        let height = board.height();
        let mut out = String::with_capacity((width + 3) * (height + 1));
        for y in (0..height).rev() {
            out.push('|');
            for x in 0..width {
                if board.occupied(x as i32, y as i32) {
                    out.push(self.filled);
                } else {
                    out.push(self.empty);
                }
            }
            out.push_str("|\n");
        }
        for _ in 0..width + 2 {
            out.push('-');
        }
        out
    }
}
