//! Exhaustive Tic-Tac-Toe search
//!
//! This crate provides:
//! - A 3x3 board model with in-place place/undo and terminal scoring
//! - Unpruned minimax and alpha-beta engines that count the nodes they visit
//! - A driver comparing both engines from any reachable position
//! - Per-move analysis of a position and JSON export of results

pub mod cli;
pub mod error;
pub mod export;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{
    AlphaBeta, Comparison, Evaluation, Minimax, PositionAnalysis, analyze_position, compare,
    compare_from_empty, evaluate_from_empty_with_alphabeta, evaluate_from_empty_with_minimax,
};
pub use tictactoe::{Board, Cell, Move, Player};
