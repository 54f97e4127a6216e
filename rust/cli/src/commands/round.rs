//! Start the next round of a game.

use crate::config::Config;
use crate::error::CliError;
use crate::io_utils::update_store;
use std::io::Write;

pub fn handle_round_command(
    game_id: u64,
    cfg: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let round = update_store(cfg, |store| Ok(store.start_round(game_id)?))?;
    let json = serde_json::to_string_pretty(&round).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json)?;
    Ok(())
}
