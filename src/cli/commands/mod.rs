//! Subcommands of the ttt-search binary

pub mod analyze;
pub mod compare;
