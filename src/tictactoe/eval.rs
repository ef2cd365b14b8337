//! Terminal scoring

use super::{
    board::Board,
    lines::{LINES, line_sum},
};

/// Score of a position MAX has won
pub const WIN_SCORE: i32 = 10;

/// Score a position from MAX's point of view: +10, -10 or 0.
///
/// Alternating play cannot complete lines for both sides, so the first
/// complete line decides.
pub fn score(board: &Board) -> i32 {
    for line in &LINES {
        match line_sum(board, line) {
            3 => return WIN_SCORE,
            -3 => return -WIN_SCORE,
            _ => {}
        }
    }
    0
}

/// True iff a line is complete or the board is full
pub fn is_terminal(board: &Board) -> bool {
    score(board) != 0 || board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_max_row_win() {
        let b = board("XXX OO. ...");
        assert_eq!(score(&b), 10);
        assert!(is_terminal(&b));
    }

    #[test]
    fn test_min_column_win() {
        // XOX
        // .OX
        // .O.
        let b = board("XOX .OX .O.");
        assert_eq!(score(&b), -10);
        assert!(is_terminal(&b));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let b = board("OOX .X. X..");
        assert_eq!(score(&b), 10);
    }

    #[test]
    fn test_draw_is_terminal_with_zero_score() {
        // XOX
        // XOO
        // OXX
        let b = board("XOX XOO OXX");
        assert_eq!(score(&b), 0);
        assert!(is_terminal(&b));
    }

    #[test]
    fn test_open_position_is_not_terminal() {
        let b = board("XX. OO. ...");
        assert_eq!(score(&b), 0);
        assert!(!is_terminal(&b));
        assert!(!is_terminal(&Board::new()));
    }

    #[test]
    fn test_double_line_through_shared_cell() {
        // Last X at the corner completes the top row and left column at once.
        // XXX
        // XOO
        // XOO
        let b = board("XXX XOO XOO");
        assert_eq!(score(&b), 10);
    }
}
