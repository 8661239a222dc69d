//! Piece module - bodies consumed by the board
//!
//! The board reads a piece through exactly two surfaces: the ordered cell
//! offsets of its body, and the skirt (lowest occupied dy per relative
//! column) used for fast drop-height lookups. Pieces are immutable once
//! built; the board never writes to one. Rotation is out of scope here -
//! each constructor yields one fixed orientation.

use arrayvec::ArrayVec;

use quadwell_types::PieceKind;

/// Offset of a single cell relative to the piece anchor. dy grows upward.
pub type CellOffset = (i8, i8);

/// Largest body a piece may have
pub const MAX_PIECE_CELLS: usize = 4;

/// An immutable piece body with its derived skirt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    body: ArrayVec<CellOffset, MAX_PIECE_CELLS>,
    skirt: ArrayVec<i8, MAX_PIECE_CELLS>,
}

impl Piece {
    /// Build a piece from its occupied cell offsets, preserving their order.
    ///
    /// Offsets must be anchored at dx >= 0, dy >= 0 and every column in the
    /// piece's span must hold at least one cell - the skirt is a dense
    /// per-column array, which all tetromino bodies satisfy.
    ///
    /// # Panics
    ///
    /// Panics on an empty body, a body larger than [`MAX_PIECE_CELLS`],
    /// negative offsets, or a hollow column.
    pub fn from_cells(cells: &[CellOffset]) -> Self {
        assert!(
            !cells.is_empty() && cells.len() <= MAX_PIECE_CELLS,
            "piece body must hold 1..={MAX_PIECE_CELLS} cells"
        );
        let mut body: ArrayVec<CellOffset, MAX_PIECE_CELLS> = ArrayVec::new();
        let mut span = 0usize;
        for &(dx, dy) in cells {
            assert!(dx >= 0 && dy >= 0, "piece offsets must be non-negative");
            span = span.max(dx as usize + 1);
            body.push((dx, dy));
        }

        let mut skirt: ArrayVec<i8, MAX_PIECE_CELLS> = ArrayVec::new();
        for col in 0..span {
            let lowest = body
                .iter()
                .filter(|&&(dx, _)| dx as usize == col)
                .map(|&(_, dy)| dy)
                .min();
            match lowest {
                Some(dy) => skirt.push(dy),
                None => panic!("piece column {col} holds no cells"),
            }
        }

        Self { body, skirt }
    }

    /// Spawn-orientation body for one of the seven classic tetrominoes.
    pub fn tetromino(kind: PieceKind) -> Self {
        Self::from_cells(&spawn_cells(kind))
    }

    /// The occupied cell offsets, in construction order.
    pub fn cells(&self) -> &[CellOffset] {
        &self.body
    }

    /// Lowest occupied dy for each relative column, left to right.
    pub fn skirt(&self) -> &[i8] {
        &self.skirt
    }

    /// Number of columns the body spans.
    pub fn width(&self) -> usize {
        self.skirt.len()
    }
}

/// Fixed spawn shapes, anchored at the bottom-left of each bounding box.
fn spawn_cells(kind: PieceKind) -> [CellOffset; 4] {
    match kind {
        PieceKind::I => [(0, 0), (1, 0), (2, 0), (3, 0)],
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::T => [(0, 0), (1, 0), (2, 0), (1, 1)],
        PieceKind::S => [(0, 0), (1, 0), (1, 1), (2, 1)],
        PieceKind::Z => [(1, 0), (2, 0), (0, 1), (1, 1)],
        PieceKind::J => [(0, 0), (1, 0), (2, 0), (0, 1)],
        PieceKind::L => [(0, 0), (1, 0), (2, 0), (2, 1)],
    }
}
