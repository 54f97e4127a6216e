//! Input parsing and validation for interactive commands.

use numguess_engine::game::{Difficulty, parse_int};

/// Outcome of parsing one line typed during a game.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A well-formed integer guess
    Guess(i64),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a line typed at the guess prompt.
///
/// # Example
///
/// ```rust
/// # use numguess_cli::validation::{parse_guess_input, ParseResult};
/// assert_eq!(parse_guess_input("7   "), ParseResult::Guess(7));
/// assert_eq!(parse_guess_input("q"), ParseResult::Quit);
/// assert_eq!(
///     parse_guess_input("?"),
///     ParseResult::Invalid("? is not an integer".to_string())
/// );
/// ```
pub fn parse_guess_input(input: &str) -> ParseResult {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return ParseResult::Quit;
    }
    match parse_int(input) {
        Ok(n) => ParseResult::Guess(n),
        Err(e) => ParseResult::Invalid(e.to_string()),
    }
}

/// Parse a difficulty name, reporting the engine's validation message on failure.
pub fn parse_difficulty(input: &str) -> Result<Difficulty, String> {
    input.trim().parse().map_err(|e: numguess_engine::errors::GameError| e.to_string())
}

/// Parse a range bound typed at a prompt or passed as a flag.
pub fn parse_bound(input: &str) -> Result<i64, String> {
    parse_int(input).map_err(|e| e.to_string())
}
