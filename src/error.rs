//! Error types for the game.

use thiserror::Error;

/// Errors raised while reading or rewriting the leaderboard file.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted leaderboard line {line}: {reason}")]
    CorruptedLine { line: usize, reason: String },
}

/// Everything that can go wrong at the command surface or during a turn.
///
/// `InvalidInput` is always recoverable: callers re-prompt.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("leaderboard error: {0}")]
    Scores(#[from] ScoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
