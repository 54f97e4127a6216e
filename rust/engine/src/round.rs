use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::game::GameId;

pub type RoundId = u64;

/// Outcome of a guess, relative to the secret number and the round's range.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuessStatus {
    Correct,
    Low,
    High,
    /// Outside the round's own range
    Invalid,
}

impl GuessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuessStatus::Correct => "correct",
            GuessStatus::Low => "low",
            GuessStatus::High => "high",
            GuessStatus::Invalid => "invalid",
        }
    }
}

/// One guess attempt within a fixed sub-range of its game.
///
/// A round is created by its [`crate::game::Game`], resolved at most once,
/// and is read-only history afterwards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub(crate) id: RoundId,
    pub(crate) game_id: GameId,
    pub(crate) range_min: i64,
    pub(crate) range_max: i64,
    pub(crate) number: u32,
    pub(crate) guess: Option<i64>,
    pub(crate) status: Option<GuessStatus>,
}

impl Round {
    pub(crate) fn new(id: RoundId, game_id: GameId, spec: RoundSpec) -> Self {
        Self {
            id,
            game_id,
            range_min: spec.range_min,
            range_max: spec.range_max,
            number: spec.number,
            guess: None,
            status: None,
        }
    }

    pub fn id(&self) -> RoundId {
        self.id
    }
    pub fn game_id(&self) -> GameId {
        self.game_id
    }
    pub fn number(&self) -> u32 {
        self.number
    }
    pub fn range_min(&self) -> i64 {
        self.range_min
    }
    pub fn range_max(&self) -> i64 {
        self.range_max
    }
    pub fn guess(&self) -> Option<i64> {
        self.guess
    }
    pub fn status(&self) -> Option<GuessStatus> {
        self.status
    }
    pub fn is_resolved(&self) -> bool {
        self.status.is_some()
    }

    /// Classifies `guess` against `secret` and this round's range, recording both.
    ///
    /// Order matters: a hit on the secret wins even outside the range, and the
    /// range check uses this round's bounds, not the game's.
    pub(crate) fn classify(&mut self, guess: i64, secret: i64) -> Result<GuessStatus, GameError> {
        if self.status.is_some() {
            return Err(GameError::RoundAlreadyResolved { round_id: self.id });
        }
        let status = if guess == secret {
            GuessStatus::Correct
        } else if guess < self.range_min || guess > self.range_max {
            GuessStatus::Invalid
        } else if guess > secret {
            GuessStatus::High
        } else {
            GuessStatus::Low
        };
        self.guess = Some(guess);
        self.status = Some(status);
        Ok(status)
    }
}

/// Range and position of a round that has not been created yet.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundSpec {
    pub range_min: i64,
    pub range_max: i64,
    pub number: u32,
}
