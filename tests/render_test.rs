//! Render tests - text view output

use quadwell::core::{Board, Piece};
use quadwell::types::PieceKind;
use quadwell::view::TextView;

#[test]
fn renders_bottom_up_with_borders() {
    let mut board = Board::new(4, 3);
    board.place(&Piece::tetromino(PieceKind::O), 1, 0).unwrap();
    board.commit();

    let text = TextView::default().render(&board);
    let expected = "\
|    |
| ++ |
| ++ |
------";
    assert_eq!(text, expected);
}

#[test]
fn renders_partial_mutation_too() {
    // A failed placement leaves cells behind; the view shows the grid as it
    // is, valid for play or not.
    let mut board = Board::new(4, 2);
    let triple = Piece::from_cells(&[(0, 0), (1, 0), (2, 0)]);
    assert!(board.place(&triple, 2, 0).is_err());

    let text = TextView::default().render(&board);
    let expected = "\
|    |
|  ++|
------";
    assert_eq!(text, expected);
}

#[test]
fn custom_glyphs() {
    let mut board = Board::new(3, 2);
    board.place(&Piece::from_cells(&[(0, 0)]), 0, 0).unwrap();
    board.commit();

    let text = TextView::new('#', '.').render(&board);
    assert_eq!(text, "|...|\n|#..|\n-----");
}
