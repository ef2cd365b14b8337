//! Per-move values of a position

use serde::Serialize;

use super::{AlphaBeta, SCORE_BOUND, fold_best, initial_best};
use crate::{
    Error, Result,
    tictactoe::{Board, Move, Player, is_terminal, legal_moves},
};

/// Exact value of one root move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveValue {
    pub mv: Move,
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionAnalysis {
    pub to_move: Player,
    pub value: i32,
    /// Every legal move in row-major order
    pub moves: Vec<MoveValue>,
    /// Moves reaching `value`, ties kept
    pub best_moves: Vec<Move>,
    pub nodes: u64,
}

/// Score every legal move of `board` for `to_move`.
///
/// Each root move gets its own full window, so its value is exact rather than
/// a bound. Root moves are counted as nodes the way the driver counts them.
pub fn analyze_position(board: &Board, to_move: Player) -> Result<PositionAnalysis> {
    let mut board = *board;
    if is_terminal(&board) {
        return Err(Error::GameOver);
    }

    let mut engine = AlphaBeta::new();
    let moves: Vec<MoveValue> = legal_moves(&board)
        .into_iter()
        .map(|mv| {
            let value = board.with_move(mv, to_move, |child| {
                engine.value(child, to_move.opponent(), -SCORE_BOUND, SCORE_BOUND)
            });
            MoveValue { mv, value }
        })
        .collect();

    let value = moves
        .iter()
        .fold(initial_best(to_move), |best, m| fold_best(to_move, best, m.value));
    let best_moves = moves
        .iter()
        .filter(|m| m.value == value)
        .map(|m| m.mv)
        .collect();

    Ok(PositionAnalysis {
        to_move,
        value,
        nodes: engine.nodes() + moves.len() as u64,
        moves,
        best_moves,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_board_has_single_winning_move() {
        let board: Board = "XX. OO. ...".parse().unwrap();
        let analysis = analyze_position(&board, Player::Max).unwrap();

        assert_eq!(analysis.value, 10);
        assert_eq!(analysis.best_moves, vec![Move::new(0, 2)]);
        let values: Vec<i32> = analysis.moves.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![10, 0, -10, -10, -10]);
        assert_eq!(analysis.nodes, 69);
    }

    #[test]
    fn test_only_center_holds_against_corner_opening() {
        let board: Board = "X.. ... ...".parse().unwrap();
        let analysis = analyze_position(&board, Player::Min).unwrap();

        assert_eq!(analysis.value, 0);
        assert_eq!(analysis.best_moves, vec![Move::new(1, 1)]);
        assert_eq!(analysis.moves.len(), 8);
        assert!(
            analysis
                .moves
                .iter()
                .filter(|m| m.mv != Move::new(1, 1))
                .all(|m| m.value == 10)
        );
    }

    #[test]
    fn test_terminal_position_is_rejected() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        assert!(matches!(
            analyze_position(&board, Player::Min),
            Err(Error::GameOver)
        ));
    }
}
