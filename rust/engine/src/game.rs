use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::round::{GuessStatus, Round, RoundId, RoundSpec};
use crate::source::NumberSource;

pub type GameId = u64;

/// How the guessing window evolves between rounds.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Window narrows after every high/low answer
    Easy,
    /// Window never narrows
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    /// Case-sensitive: only `easy` and `hard` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::InvalidDifficulty(other.to_string())),
        }
    }
}

/// Input for creating a game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct NewGame {
    pub difficulty: Difficulty,
    pub range_min: i64,
    pub range_max: i64,
}

impl NewGame {
    /// Builds creation input from raw text, trimming surrounding whitespace.
    pub fn parse(difficulty: &str, range_min: &str, range_max: &str) -> Result<Self, GameError> {
        let new_game = Self {
            difficulty: difficulty.trim().parse()?,
            range_min: parse_int(range_min)?,
            range_max: parse_int(range_max)?,
        };
        new_game.validate()?;
        Ok(new_game)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.range_min > self.range_max {
            return Err(GameError::InvalidRange {
                min: self.range_min,
                max: self.range_max,
            });
        }
        Ok(())
    }
}

/// Input for resolving the current round of a game.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct GuessInput {
    pub round_id: RoundId,
    pub guess: i64,
}

/// Parses an integer the way player input is accepted: surrounding
/// whitespace is ignored, anything else is rejected.
pub fn parse_int(s: &str) -> Result<i64, GameError> {
    s.trim()
        .parse()
        .map_err(|_| GameError::InvalidInteger(s.to_string()))
}

/// A number-guessing game: configuration, secret number and round history.
///
/// Rounds live in an append-only vector ordered by number, so the current
/// round is always the last element and at most that one is unresolved.
///
/// # Examples
///
/// ```
/// use numguess_engine::game::{Difficulty, Game, GuessInput, NewGame};
/// use numguess_engine::round::GuessStatus;
/// use numguess_engine::source::FixedNumber;
///
/// let input = NewGame { difficulty: Difficulty::Easy, range_min: 1, range_max: 10 };
/// let mut game = Game::new(1, input, &mut FixedNumber(5)).unwrap();
///
/// let round_id = game.start_round(1).unwrap().id();
/// let status = game.submit(GuessInput { round_id, guess: 8 }).unwrap();
/// assert_eq!(status, GuessStatus::High);
///
/// let next = game.next_round_spec().unwrap();
/// assert_eq!((next.range_min, next.range_max, next.number), (1, 7, 2));
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) id: GameId,
    pub(crate) difficulty: Difficulty,
    pub(crate) range_min: i64,
    pub(crate) range_max: i64,
    pub(crate) secret_number: i64,
    pub(crate) is_over: bool,
    pub(crate) rounds: Vec<Round>,
}

impl Game {
    /// Validates `input` and draws the secret number from `source` once.
    pub fn new(
        id: GameId,
        input: NewGame,
        source: &mut dyn NumberSource,
    ) -> Result<Self, GameError> {
        input.validate()?;
        let secret_number = source.pick(input.range_min, input.range_max);
        tracing::info!(
            game_id = id,
            difficulty = %input.difficulty,
            range_min = input.range_min,
            range_max = input.range_max,
            "game created"
        );
        Ok(Self {
            id,
            difficulty: input.difficulty,
            range_min: input.range_min,
            range_max: input.range_max,
            secret_number,
            is_over: false,
            rounds: Vec::new(),
        })
    }

    pub fn id(&self) -> GameId {
        self.id
    }
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
    pub fn range_min(&self) -> i64 {
        self.range_min
    }
    pub fn range_max(&self) -> i64 {
        self.range_max
    }
    pub fn is_over(&self) -> bool {
        self.is_over
    }
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }
    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    /// Only for dump-style introspection; gameplay never needs it.
    pub fn secret_number(&self) -> i64 {
        self.secret_number
    }

    /// Computes range and number of the next round without creating it.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once the secret has been guessed
    /// - [`GameError::UnresolvedRound`] while the current round awaits a guess
    pub fn next_round_spec(&self) -> Result<RoundSpec, GameError> {
        if self.is_over {
            return Err(GameError::GameOver { game_id: self.id });
        }
        let Some(prev) = self.current_round() else {
            return Ok(RoundSpec {
                range_min: self.range_min,
                range_max: self.range_max,
                number: 1,
            });
        };
        let (Some(status), Some(guess)) = (prev.status, prev.guess) else {
            return Err(GameError::UnresolvedRound { round_id: prev.id });
        };

        let mut next = RoundSpec {
            range_min: prev.range_min,
            range_max: prev.range_max,
            number: prev.number + 1,
        };
        if self.difficulty == Difficulty::Easy {
            // Invalid answers carry no information, so only high/low narrow.
            match status {
                GuessStatus::High => next.range_max = guess - 1,
                GuessStatus::Low => next.range_min = guess + 1,
                GuessStatus::Correct | GuessStatus::Invalid => {}
            }
        }
        if next.range_min > next.range_max {
            tracing::warn!(
                game_id = self.id,
                number = next.number,
                range_min = next.range_min,
                range_max = next.range_max,
                "narrowed round range is empty"
            );
        }
        Ok(next)
    }

    /// Creates the next round under `id` and makes it current.
    pub fn start_round(&mut self, id: RoundId) -> Result<&Round, GameError> {
        let spec = self.next_round_spec()?;
        tracing::debug!(
            game_id = self.id,
            round_id = id,
            number = spec.number,
            range_min = spec.range_min,
            range_max = spec.range_max,
            "round started"
        );
        self.rounds.push(Round::new(id, self.id, spec));
        Ok(&self.rounds[self.rounds.len() - 1])
    }

    /// Resolves the current round with `guess`; a correct guess ends the game.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once the secret has been guessed
    /// - [`GameError::NoCurrentRound`] before the first round exists
    /// - [`GameError::StaleRound`] when `round_id` is not the current round
    /// - [`GameError::RoundAlreadyResolved`] when the current round already has a guess
    pub fn submit_guess(&mut self, round_id: RoundId, guess: i64) -> Result<GuessStatus, GameError> {
        if self.is_over {
            return Err(GameError::GameOver { game_id: self.id });
        }
        let secret = self.secret_number;
        let game_id = self.id;
        let round = self
            .rounds
            .last_mut()
            .ok_or(GameError::NoCurrentRound { game_id })?;
        if round.id != round_id {
            return Err(GameError::StaleRound { round_id });
        }
        let status = round.classify(guess, secret)?;
        tracing::debug!(
            game_id,
            round_id,
            number = round.number,
            guess,
            status = status.as_str(),
            "guess classified"
        );
        if status == GuessStatus::Correct {
            self.is_over = true;
            tracing::info!(game_id, rounds = self.rounds.len(), "game over");
        }
        Ok(status)
    }

    pub fn submit(&mut self, input: GuessInput) -> Result<GuessStatus, GameError> {
        self.submit_guess(input.round_id, input.guess)
    }
}
