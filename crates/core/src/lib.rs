//! Core playfield logic - pure, deterministic, and testable
//!
//! This crate holds the board state machine and its collaborators. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: the same placement sequence produces the same grid
//! - **Testable**: every rule is exercised by unit and integration tests
//! - **Fast**: all storage is allocated once at board construction
//!
//! # Module Structure
//!
//! - [`board`]: the occupancy grid with cached tallies, row clearing, and
//!   single-level undo via a commit/uncommit snapshot machine
//! - [`piece`]: immutable piece bodies and their skirts
//! - [`rng`]: a seeded LCG for reproducible driver runs and tests
//!
//! # Board Rules
//!
//! - A placement writes offsets in order and stops at the first failure;
//!   cells written before the failure stay written, and `undo` restores the
//!   pre-episode state
//! - Completed rows are removed by gravity compaction: rows above shift
//!   down, relative order preserved, tallies rebuilt from the grid
//! - One mutation episode may be pending at a time; `commit` accepts it,
//!   `undo` reverts it, and the next episode overwrites the snapshot
//!
//! # Example
//!
//! ```
//! use quadwell_core::{Board, Piece};
//! use quadwell_types::{PieceKind, PlaceOutcome};
//!
//! let mut board = Board::new(4, 4);
//! let bar = Piece::tetromino(PieceKind::I);
//!
//! // A four-wide bar fills the bottom row of a four-wide board.
//! assert_eq!(board.place(&bar, 0, 0), Ok(PlaceOutcome::RowFilled));
//! assert_eq!(board.clear_rows(), 1);
//! board.commit();
//! assert_eq!(board.max_height(), 0);
//! ```

pub mod board;
pub mod piece;
pub mod rng;

pub use quadwell_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use piece::{CellOffset, Piece, MAX_PIECE_CELLS};
pub use rng::SimpleRng;
