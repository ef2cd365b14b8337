//! Error types for the ttt-search crate

use thiserror::Error;

/// Main error type for the ttt-search crate
///
/// The search itself is total; only parsing positions, analysing finished
/// games, and writing reports can fail.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board string has the wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={max_count}, O={min_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { max_count: usize, min_count: usize },

    #[error("position '{context}' cannot arise from alternating play: {reason}")]
    UnreachablePosition { reason: String, context: String },

    #[error("{to_move} cannot be to move with X={max_count}, O={min_count}")]
    TurnMismatch {
        to_move: crate::tictactoe::Player,
        max_count: usize,
        min_count: usize,
    },

    #[error("game already over")]
    GameOver,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
