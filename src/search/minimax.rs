//! Unpruned minimax

use super::{SearchEngine, Window, fold_best, initial_best};
use crate::tictactoe::{Board, Player, is_terminal, legal_moves, score};

/// Full-tree minimax. Every node below the starting position is visited once.
#[derive(Debug, Default)]
pub struct Minimax {
    nodes: u64,
}

impl Minimax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Game value of `board` with `player` to move under optimal play
    pub fn value(&mut self, board: &mut Board, player: Player) -> i32 {
        self.nodes += 1;

        if is_terminal(board) {
            return score(board);
        }

        let mut best = initial_best(player);
        for mv in legal_moves(board) {
            let value = board.with_move(mv, player, |child| self.value(child, player.opponent()));
            best = fold_best(player, best, value);
        }
        best
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl SearchEngine for Minimax {
    const NAME: &'static str = "minimax";

    fn search(&mut self, board: &mut Board, player: Player, _window: Window) -> i32 {
        self.value(board, player)
    }

    fn nodes(&self) -> u64 {
        self.nodes
    }
}
