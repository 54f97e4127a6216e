//! Submit one guess non-interactively.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::response_message;
use crate::io_utils::update_store;
use numguess_engine::game::{GuessInput, parse_int};
use std::io::Write;

/// Resolves round `round_id` of `game_id` with `value` and prints the response.
pub fn handle_guess_command(
    game_id: u64,
    round_id: u64,
    value: &str,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let guess = parse_int(value)?;
    let (status, round) = update_store(cfg, |store| {
        Ok(store.submit_guess(game_id, GuessInput { round_id, guess })?)
    })?;
    tracing::debug!(game_id, round_id, status = status.as_str(), "guess submitted");
    if let Some(msg) = response_message(&round) {
        writeln!(out, "{}", msg)?;
    }
    Ok(())
}
