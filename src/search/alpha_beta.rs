//! Minimax with alpha-beta pruning

use super::{SearchEngine, Window, fold_best, initial_best};
use crate::tictactoe::{Board, Player, is_terminal, legal_moves, score};

/// Alpha-beta search without move ordering.
///
/// Returns exactly what [`Minimax`](super::Minimax) returns for the same
/// position when started from [`Window::FULL`].
#[derive(Debug, Default)]
pub struct AlphaBeta {
    nodes: u64,
}

impl AlphaBeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Game value of `board` with `player` to move.
    ///
    /// `alpha` is the best value MAX can already guarantee on the path to the
    /// root and `beta` the best MIN can. The cutoff is checked after each
    /// child, so the first child is always explored.
    pub fn value(&mut self, board: &mut Board, player: Player, alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        if is_terminal(board) {
            return score(board);
        }

        let mut window = Window { alpha, beta };
        let mut best = initial_best(player);
        for mv in legal_moves(board) {
            let value = board.with_move(mv, player, |child| {
                self.value(child, player.opponent(), window.alpha, window.beta)
            });
            best = fold_best(player, best, value);
            window.tighten(player, best);
            if window.is_closed() {
                break;
            }
        }
        best
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl SearchEngine for AlphaBeta {
    const NAME: &'static str = "alpha-beta";

    fn search(&mut self, board: &mut Board, player: Player, window: Window) -> i32 {
        self.value(board, player, window.alpha, window.beta)
    }

    fn nodes(&self) -> u64 {
        self.nodes
    }
}
