//! Shared configuration types for CLI commands

use clap::ValueEnum;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::tictactoe::Player;

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Whether to show a spinner while searching
    pub progress: bool,

    /// Verbose output
    pub verbose: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            progress: true,
            verbose: false,
        }
    }
}

impl CommonConfig {
    /// Log level for the stderr logger
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}

/// Report rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Side to move, as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    /// X, the maximizing player
    #[value(alias = "x")]
    Max,
    /// O, the minimizing player
    #[value(alias = "o")]
    Min,
}

impl From<SideArg> for Player {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Max => Player::Max,
            SideArg::Min => Player::Min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CommonConfig::default();
        assert!(config.progress);
        assert_eq!(config.log_level(), LevelFilter::Warn);
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_verbose_raises_log_level() {
        let config = CommonConfig {
            verbose: true,
            ..CommonConfig::default()
        };
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_side_aliases() {
        assert_eq!(SideArg::from_str("x", true).unwrap(), SideArg::Max);
        assert_eq!(SideArg::from_str("min", true).unwrap(), SideArg::Min);
        assert_eq!(Player::from(SideArg::Min), Player::Min);
    }
}
