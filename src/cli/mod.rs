//! CLI infrastructure for ttt-search
//!
//! Thin presentation over the search engines: argument parsing, logging
//! setup, spinners and report rendering.

pub mod commands;
pub mod config;
pub mod output;

use std::str::FromStr;

use anyhow::{Context, Result};

use crate::tictactoe::{Board, Player};
use config::{CommonConfig, SideArg};

/// Route `log` output to stderr at the configured level
pub fn init_logging(config: &CommonConfig) {
    simple_logging::log_to_stderr(config.log_level());
}

/// Parse an optional `--state` board and side to move.
///
/// A missing board means the empty board; a missing side is inferred from
/// the piece counts, and an explicit side must agree with them.
pub fn resolve_position(state: Option<&str>, side: Option<SideArg>) -> Result<(Board, Player)> {
    let board = match state {
        Some(s) => Board::from_str(s).with_context(|| format!("invalid --state '{s}'"))?,
        None => Board::new(),
    };
    let to_move = match side {
        Some(side) => {
            let to_move = Player::from(side);
            board
                .check_turn(to_move)
                .context("--to-move contradicts the position")?;
            to_move
        }
        None => board.side_to_move(),
    };
    Ok((board, to_move))
}
