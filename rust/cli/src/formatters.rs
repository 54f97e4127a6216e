//! Display text for games and rounds.
//!
//! Pure functions turning engine state into the lines the CLI prints.
//!
//! ## Example
//!
//! ```rust
//! use numguess_cli::formatters::status_message;
//! use numguess_engine::round::GuessStatus;
//!
//! assert_eq!(status_message(3, GuessStatus::Low, 1, 10), "3 is too low.");
//! ```

use numguess_engine::game::Game;
use numguess_engine::round::{GuessStatus, Round};

/// Response to a classified guess.
pub fn status_message(guess: i64, status: GuessStatus, range_min: i64, range_max: i64) -> String {
    match status {
        GuessStatus::Correct => format!("{} is correct!", guess),
        GuessStatus::Low => format!("{} is too low.", guess),
        GuessStatus::High => format!("{} is too high.", guess),
        GuessStatus::Invalid => format!(
            "{} is outside the range {}..{}.",
            guess, range_min, range_max
        ),
    }
}

/// Response for a resolved round, `None` while it still awaits a guess.
pub fn response_message(round: &Round) -> Option<String> {
    match (round.guess(), round.status()) {
        (Some(guess), Some(status)) => Some(status_message(
            guess,
            status,
            round.range_min(),
            round.range_max(),
        )),
        _ => None,
    }
}

pub fn format_range(min: i64, max: i64) -> String {
    format!("{}..{}", min, max)
}

/// One-line listing of a game. Never shows the secret.
pub fn format_game_line(game: &Game) -> String {
    let state = if game.is_over() {
        "over"
    } else {
        "in progress"
    };
    let rounds = game.rounds().len();
    format!(
        "Game {}: {} {}, {} round{}, {}",
        game.id(),
        game.difficulty(),
        format_range(game.range_min(), game.range_max()),
        rounds,
        if rounds == 1 { "" } else { "s" },
        state
    )
}

/// One-line listing of a round.
pub fn format_round_line(round: &Round) -> String {
    let outcome = response_message(round).unwrap_or_else(|| "awaiting guess".to_string());
    format!(
        "Round {} (game {}, #{}): {} - {}",
        round.id(),
        round.game_id(),
        round.number(),
        format_range(round.range_min(), round.range_max()),
        outcome
    )
}
