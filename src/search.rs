//! Exhaustive game-tree search with node counting
//!
//! Two engines share one contract: [`Minimax`] walks the full tree below a
//! position and [`AlphaBeta`] skips siblings once `alpha >= beta`. Both return
//! the same value for every position; only their node counts differ. Each
//! engine value owns its counter, so a fresh engine is a fresh count.

pub mod alpha_beta;
pub mod analysis;
pub mod compare;
pub mod driver;
pub mod minimax;

use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, Player, WIN_SCORE};

pub use alpha_beta::AlphaBeta;
pub use analysis::{MoveValue, PositionAnalysis, analyze_position};
pub use compare::{Comparison, compare, compare_from_empty};
pub use driver::{
    evaluate_from_empty_with_alphabeta, evaluate_from_empty_with_minimax, evaluate_with,
    evaluate_with_alphabeta, evaluate_with_minimax,
};
pub use minimax::Minimax;

/// Stands in for infinity: strictly outside every terminal score
pub const SCORE_BOUND: i32 = WIN_SCORE + 1;

/// Alpha-beta bounds: the best values MAX and MIN can already guarantee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub alpha: i32,
    pub beta: i32,
}

impl Window {
    /// The unbounded window, `(-inf, +inf)`
    pub const FULL: Window = Window {
        alpha: -SCORE_BOUND,
        beta: SCORE_BOUND,
    };

    /// Fold a value `player` has secured into the window
    pub fn tighten(&mut self, player: Player, best: i32) {
        match player {
            Player::Max => self.alpha = self.alpha.max(best),
            Player::Min => self.beta = self.beta.min(best),
        }
    }

    /// No sibling left to explore can change the parent's choice
    pub fn is_closed(&self) -> bool {
        self.alpha >= self.beta
    }
}

/// Optimal value of a position together with the nodes visited to find it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub value: i32,
    pub nodes: u64,
}

/// A recursive value function that counts its own invocations
pub trait SearchEngine {
    /// Short label used in logs and reports
    const NAME: &'static str;

    /// Value of `board` with `player` to move. The board is restored before
    /// returning.
    fn search(&mut self, board: &mut Board, player: Player, window: Window) -> i32;

    /// Invocations of [`search`](Self::search) and its recursion so far
    fn nodes(&self) -> u64;
}

/// Starting point of a fold for `player`: below every score for MAX, above for MIN
pub(crate) fn initial_best(player: Player) -> i32 {
    match player {
        Player::Max => -SCORE_BOUND,
        Player::Min => SCORE_BOUND,
    }
}

/// Fold a child value into `player`'s running extremum
pub(crate) fn fold_best(player: Player, best: i32, value: i32) -> i32 {
    match player {
        Player::Max => best.max(value),
        Player::Min => best.min(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_window_is_open() {
        assert!(!Window::FULL.is_closed());
        assert!(Window::FULL.alpha < -WIN_SCORE);
        assert!(Window::FULL.beta > WIN_SCORE);
    }

    #[test]
    fn test_tighten_moves_the_right_bound() {
        let mut window = Window::FULL;
        window.tighten(Player::Max, 0);
        assert_eq!(window.alpha, 0);
        assert_eq!(window.beta, SCORE_BOUND);

        window.tighten(Player::Min, 10);
        assert_eq!(window.beta, 10);
        assert!(!window.is_closed());

        window.tighten(Player::Min, -10);
        assert!(window.is_closed());
    }

    #[test]
    fn test_fold_best() {
        let best = [10, -10, 0]
            .into_iter()
            .fold(initial_best(Player::Max), |b, v| fold_best(Player::Max, b, v));
        assert_eq!(best, 10);

        let best = [10, -10, 0]
            .into_iter()
            .fold(initial_best(Player::Min), |b, v| fold_best(Player::Min, b, v));
        assert_eq!(best, -10);
    }
}
