//! Root-level driver shared by both engines
//!
//! The driver enumerates the root moves itself and calls the engine on each
//! successor, so the root is not an engine node. Each enumerated root move is
//! added to the total instead. From the empty board that is 9 extra nodes on
//! top of the engine's own count.

use log::debug;

use super::{AlphaBeta, Evaluation, Minimax, SearchEngine, Window, fold_best, initial_best};
use crate::tictactoe::{Board, Player, is_terminal, legal_moves, score};

/// Evaluate `board` with `to_move` to play using `engine`.
///
/// The search runs on a private copy of `board`. After each root move the
/// window is tightened for `to_move`, so later root branches are searched
/// against the best value found so far. A terminal root is scored directly
/// and counts as one node.
pub fn evaluate_with<E: SearchEngine>(mut engine: E, board: &Board, to_move: Player) -> Evaluation {
    let mut board = *board;

    if is_terminal(&board) {
        return Evaluation {
            value: score(&board),
            nodes: 1,
        };
    }

    let moves = legal_moves(&board);
    let mut window = Window::FULL;
    let mut best = initial_best(to_move);
    for &mv in &moves {
        let value = board.with_move(mv, to_move, |child| {
            engine.search(child, to_move.opponent(), window)
        });
        best = fold_best(to_move, best, value);
        window.tighten(to_move, best);
    }

    let nodes = engine.nodes() + moves.len() as u64;
    debug!(
        "{}: value {best} after {nodes} nodes ({} root moves, {to_move} to move)",
        E::NAME,
        moves.len()
    );

    Evaluation { value: best, nodes }
}

pub fn evaluate_with_minimax(board: &Board, to_move: Player) -> Evaluation {
    evaluate_with(Minimax::new(), board, to_move)
}

pub fn evaluate_with_alphabeta(board: &Board, to_move: Player) -> Evaluation {
    evaluate_with(AlphaBeta::new(), board, to_move)
}

/// Unpruned search from the empty board, MAX to move
pub fn evaluate_from_empty_with_minimax() -> Evaluation {
    evaluate_with_minimax(&Board::new(), Player::Max)
}

/// Pruned search from the empty board, MAX to move
pub fn evaluate_from_empty_with_alphabeta() -> Evaluation {
    evaluate_with_alphabeta(&Board::new(), Player::Max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_board_counts_root_moves() {
        let board: Board = "XX. OO. ...".parse().unwrap();

        let minimax = evaluate_with_minimax(&board, Player::Max);
        assert_eq!(minimax, Evaluation { value: 10, nodes: 161 });

        let alpha_beta = evaluate_with_alphabeta(&board, Player::Max);
        assert_eq!(alpha_beta, Evaluation { value: 10, nodes: 40 });
    }

    #[test]
    fn test_min_to_move_tightens_beta() {
        let board: Board = "X.. ... ...".parse().unwrap();

        let minimax = evaluate_with_minimax(&board, Player::Min);
        assert_eq!(minimax, Evaluation { value: 0, nodes: 59712 });

        let alpha_beta = evaluate_with_alphabeta(&board, Player::Min);
        assert_eq!(alpha_beta, Evaluation { value: 0, nodes: 2345 });
    }

    #[test]
    fn test_terminal_root() {
        let board: Board = "XOX XOO OXX".parse().unwrap();
        let expected = Evaluation { value: 0, nodes: 1 };
        assert_eq!(evaluate_with_minimax(&board, Player::Min), expected);
        assert_eq!(evaluate_with_alphabeta(&board, Player::Min), expected);
    }

    #[test]
    fn test_caller_board_is_untouched() {
        let board: Board = "XO. ... ...".parse().unwrap();
        let before = board;
        let minimax = evaluate_with_minimax(&board, Player::Max);
        let alpha_beta = evaluate_with_alphabeta(&board, Player::Max);
        assert_eq!(board, before);
        assert_eq!(minimax, Evaluation { value: 10, nodes: 8238 });
        assert_eq!(alpha_beta, Evaluation { value: 10, nodes: 755 });
    }
}
