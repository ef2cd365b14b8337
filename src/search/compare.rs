//! Side-by-side comparison of the two engines

use log::info;
use serde::{Deserialize, Serialize};

use super::{Evaluation, evaluate_with_alphabeta, evaluate_with_minimax};
use crate::tictactoe::{Board, Player};

/// Both engines run on the same position, each with its own board and counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub minimax: Evaluation,
    pub alpha_beta: Evaluation,
}

impl Comparison {
    /// Nodes alpha-beta did not have to visit
    pub fn saved_nodes(&self) -> u64 {
        self.minimax.nodes.saturating_sub(self.alpha_beta.nodes)
    }

    /// `saved_nodes` as a percentage of the minimax count
    pub fn reduction_percent(&self) -> f64 {
        if self.minimax.nodes == 0 {
            return 0.0;
        }
        self.saved_nodes() as f64 / self.minimax.nodes as f64 * 100.0
    }

    pub fn values_agree(&self) -> bool {
        self.minimax.value == self.alpha_beta.value
    }
}

pub fn compare(board: &Board, to_move: Player) -> Comparison {
    let comparison = Comparison {
        minimax: evaluate_with_minimax(board, to_move),
        alpha_beta: evaluate_with_alphabeta(board, to_move),
    };
    info!(
        "minimax {} nodes, alpha-beta {} nodes, {:.2}% fewer",
        comparison.minimax.nodes,
        comparison.alpha_beta.nodes,
        comparison.reduction_percent()
    );
    comparison
}

/// Compare both engines from the empty board with MAX to move
pub fn compare_from_empty() -> Comparison {
    compare(&Board::new(), Player::Max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_savings_arithmetic() {
        let comparison = Comparison {
            minimax: Evaluation { value: 0, nodes: 200 },
            alpha_beta: Evaluation { value: 0, nodes: 50 },
        };
        assert_eq!(comparison.saved_nodes(), 150);
        assert!((comparison.reduction_percent() - 75.0).abs() < 1e-9);
        assert!(comparison.values_agree());
    }

    #[test]
    fn test_zero_nodes_reports_no_reduction() {
        let comparison = Comparison {
            minimax: Evaluation { value: 0, nodes: 0 },
            alpha_beta: Evaluation { value: 0, nodes: 0 },
        };
        assert_eq!(comparison.reduction_percent(), 0.0);
    }

    #[test]
    fn test_compare_scenario_board() {
        let board: Board = "XX. OO. ...".parse().unwrap();
        let comparison = compare(&board, Player::Max);
        assert!(comparison.values_agree());
        assert_eq!(comparison.minimax.value, 10);
        assert_eq!(comparison.saved_nodes(), 161 - 40);
    }

    #[test]
    fn test_serializes_to_json() {
        let board: Board = "XX. OO. ...".parse().unwrap();
        let comparison = compare(&board, Player::Max);
        let json = serde_json::to_value(comparison).unwrap();
        assert_eq!(json["minimax"]["nodes"], 161);
        assert_eq!(json["alpha_beta"]["value"], 10);
    }
}
