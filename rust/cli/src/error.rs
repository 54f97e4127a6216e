//! Error types for the CLI application.
//!
//! Engine and store failures are folded into [`CliError`] so every command
//! handler can propagate with `?` and `run` can map the outcome to an exit
//! code in one place.

use numguess_engine::errors::GameError;
use numguess_engine::store::StoreError;
use std::fmt;

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// A game id that the store does not know
    NotFound(String),

    /// Rule violation reported by the game engine
    Game(GameError),

    /// Snapshot file could not be read or written
    Storage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::NotFound(msg) => f.write_str(msg),
            CliError::Game(e) => write!(f, "{}", e),
            CliError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Game(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        if error.is_validation() {
            CliError::InvalidInput(error.to_string())
        } else {
            CliError::Game(error)
        }
    }
}

impl From<StoreError> for CliError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::GameNotFound(id) => CliError::NotFound(format!("Game {} not found", id)),
            StoreError::Game(e) => e.into(),
            StoreError::Io(e) => CliError::Io(e),
            other => CliError::Storage(other.to_string()),
        }
    }
}
