//! Read-only listings: games, a single game, rounds.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_game_line, format_round_line};
use crate::io_utils::open_store;
use std::io::Write;

pub fn handle_games_command(cfg: &Config, out: &mut dyn Write) -> Result<(), CliError> {
    let games = open_store(cfg)?.games()?;
    if games.is_empty() {
        writeln!(out, "No games to show.")?;
    }
    for game in &games {
        writeln!(out, "{}", format_game_line(game))?;
    }
    Ok(())
}

/// Prints one game as JSON; `dump` adds the secret number.
pub fn handle_game_command(
    id: u64,
    dump: bool,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let game = open_store(cfg)?.game(id)?;
    let json = if dump {
        serde_json::to_string_pretty(&game.dump())
    } else {
        serde_json::to_string_pretty(&game.summary())
    }
    .map_err(std::io::Error::other)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

pub fn handle_rounds_command(
    game_id: Option<u64>,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let store = open_store(cfg)?;
    let rounds = match game_id {
        Some(id) => store.rounds_for_game(id)?,
        None => store.rounds()?,
    };
    if rounds.is_empty() {
        writeln!(out, "No rounds to show.")?;
    }
    for round in &rounds {
        writeln!(out, "{}", format_round_line(round))?;
    }
    Ok(())
}
