//! Tic-Tac-Toe board model, winning lines and terminal evaluation

pub mod board;
pub mod eval;
pub mod lines;
pub mod moves;
pub mod validation;

pub use board::{Board, Cell, Player};
pub use eval::{WIN_SCORE, is_terminal, score};
pub use lines::{LINES, line_sum};
pub use moves::{Move, legal_moves};
