//! Move coordinates and legal move enumeration

use std::fmt;

use serde::Serialize;

use super::board::{Board, Cell};

/// A cell coordinate. Only [`Move::new`] builds one, so `row` and `col` are
/// always in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Panics if either coordinate is 3 or more
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < 3 && col < 3, "coordinate off the 3x3 board");
        Move { row, col }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index in `0..9`
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// All nine coordinates in row-major order
    pub fn all() -> impl Iterator<Item = Move> {
        (0..9).map(|i| Move::new(i / 3, i % 3))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// All empty cells of `board`, row 0 first and column 0 first within a row.
///
/// Node counts and alpha-beta cutoffs both depend on this order.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    Move::all()
        .filter(|&mv| board.get(mv) == Cell::Empty)
        .collect()
}
