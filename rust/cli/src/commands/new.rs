//! Non-interactive game creation.

use crate::config::Config;
use crate::error::CliError;
use crate::io_utils::update_store;
use crate::validation::{parse_bound, parse_difficulty};
use numguess_engine::game::NewGame;
use numguess_engine::source::seeded_source;
use std::io::Write;

/// Game settings given on the command line; unset ones fall back to config.
#[derive(Debug, Clone, Default)]
pub struct GameArgs {
    pub difficulty: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub seed: Option<u64>,
}

impl GameArgs {
    pub(crate) fn seed(&self, cfg: &Config) -> u64 {
        self.seed.or(cfg.seed).unwrap_or_else(rand::random)
    }
}

/// Creates a game from flags and config, starts round 1 and prints the
/// game summary as JSON.
pub fn handle_new_command(
    args: GameArgs,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let input = resolve_new_game(&args, cfg)?;
    let seed = args.seed(cfg);
    let summary = update_store(cfg, |store| {
        let game_id = store.create_game(input, &mut seeded_source(seed))?;
        store.start_round(game_id)?;
        tracing::debug!(game_id, seed, "game created from flags");
        Ok(store.game(game_id)?.summary())
    })?;
    let json = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

fn resolve_new_game(args: &GameArgs, cfg: &Config) -> Result<NewGame, CliError> {
    let difficulty = match &args.difficulty {
        Some(s) => parse_difficulty(s).map_err(CliError::InvalidInput)?,
        None => cfg.difficulty,
    };
    let range_min = match &args.min {
        Some(s) => parse_bound(s).map_err(CliError::InvalidInput)?,
        None => cfg.range_min,
    };
    let range_max = match &args.max {
        Some(s) => parse_bound(s).map_err(CliError::InvalidInput)?,
        None => cfg.range_max,
    };
    let input = NewGame {
        difficulty,
        range_min,
        range_max,
    };
    input.validate()?;
    Ok(input)
}
