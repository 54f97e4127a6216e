use thiserror::Error;

use crate::game::GameId;
use crate::round::RoundId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Must be one of: easy, hard. (got {0:?})")]
    InvalidDifficulty(String),
    #[error("range_min {min} is greater than range_max {max}")]
    InvalidRange { min: i64, max: i64 },
    #[error("{0} is not an integer")]
    InvalidInteger(String),
    #[error("Round {round_id} status has already been set.")]
    RoundAlreadyResolved { round_id: RoundId },
    #[error("Game {game_id} is over.")]
    GameOver { game_id: GameId },
    #[error("Round {round_id} is not current.")]
    StaleRound { round_id: RoundId },
    #[error("Current round {round_id} status must be set prior to creating a new round.")]
    UnresolvedRound { round_id: RoundId },
    #[error("Game {game_id} does not contain a round to update.")]
    NoCurrentRound { game_id: GameId },
}

impl GameError {
    /// True for malformed input rejected before any state was touched.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GameError::InvalidDifficulty(_)
                | GameError::InvalidRange { .. }
                | GameError::InvalidInteger(_)
        )
    }
}
