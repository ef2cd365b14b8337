//! Winning lines of the 3x3 board

use super::{board::Board, moves::Move};

const fn at(row: usize, col: usize) -> Move {
    Move::new(row, col)
}

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals
pub const LINES: [[Move; 3]; 8] = [
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)], // rows
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)], // columns
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)], // diagonals
];

/// Sum of the cell values along a line: +3 is three MAX marks, -3 three MIN marks
pub fn line_sum(board: &Board, line: &[Move; 3]) -> i32 {
    line.iter().map(|&mv| board.get(mv).value()).sum()
}
