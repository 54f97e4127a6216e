//! Delete a game together with its rounds.

use crate::config::Config;
use crate::error::CliError;
use crate::io_utils::update_store;
use std::io::Write;

pub fn handle_delete_command(id: u64, cfg: &Config, out: &mut dyn Write) -> Result<(), CliError> {
    update_store(cfg, |store| Ok(store.delete_game(id)?))?;
    writeln!(out, "Game {} deleted.", id)?;
    Ok(())
}
