//! Observation snapshots for external tooling.
//!
//! A [`BoardObservation`] is a plain-data capture of the full board state -
//! grid, tallies, and commit flag - meant to be serialized as one JSON value
//! per step and consumed by anything downstream (loggers, analysis scripts,
//! replay tooling). It carries no references into the board.

use serde::{Deserialize, Serialize};

use crate::core::Board;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardObservation {
    pub width: usize,
    pub height: usize,
    /// Row-major occupancy, bottom row first, 1 = filled
    pub cells: Vec<u8>,
    pub col_heights: Vec<usize>,
    pub row_fills: Vec<usize>,
    pub max_height: usize,
    pub committed: bool,
}

impl BoardObservation {
    /// Capture the board's current state.
    pub fn capture(board: &Board) -> Self {
        Self {
            width: board.width(),
            height: board.height(),
            cells: board.cells().iter().map(|&filled| filled as u8).collect(),
            col_heights: (0..board.width()).map(|x| board.column_height(x)).collect(),
            row_fills: (0..board.height()).map(|y| board.row_width(y)).collect(),
            max_height: board.max_height(),
            committed: board.is_committed(),
        }
    }
}
