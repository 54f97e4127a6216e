//! Read-only representations of a game for display and serialization.

use serde::{Deserialize, Serialize};

use crate::game::{Difficulty, Game, GameId};
use crate::round::Round;

/// What callers see of a game. The secret number is deliberately absent.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: GameId,
    pub difficulty: Difficulty,
    pub range_min: i64,
    pub range_max: i64,
    pub is_over: bool,
    pub number_of_rounds: usize,
    pub current_round: Option<Round>,
}

/// Introspection view: the summary plus the secret number.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameDump {
    #[serde(flatten)]
    pub summary: GameSummary,
    pub secret_number: i64,
}

impl Game {
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            id: self.id,
            difficulty: self.difficulty,
            range_min: self.range_min,
            range_max: self.range_max,
            is_over: self.is_over,
            number_of_rounds: self.rounds.len(),
            current_round: self.current_round().cloned(),
        }
    }

    pub fn dump(&self) -> GameDump {
        GameDump {
            summary: self.summary(),
            secret_number: self.secret_number,
        }
    }
}
