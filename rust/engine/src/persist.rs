//! Snapshot persistence for [`GameStore`].
//!
//! The whole store is written as one pretty-printed JSON document. Loading
//! re-checks the table constraints a relational schema would enforce, so a
//! hand-edited or truncated file is rejected instead of producing games
//! that violate their invariants.

use std::collections::HashSet;
use std::fs::{self, create_dir_all};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::game::Game;
use crate::round::{GuessStatus, Round};
use crate::store::{GameStore, StoreError};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    /// RFC3339 time of the save
    #[serde(default)]
    pub saved_at: Option<String>,
    pub next_game_id: u64,
    pub next_round_id: u64,
    pub games: Vec<Game>,
}

impl GameStore {
    pub fn snapshot(&self) -> Result<Snapshot, StoreError> {
        let (next_game_id, next_round_id) = self.next_ids();
        Ok(Snapshot {
            version: SNAPSHOT_VERSION,
            saved_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
            next_game_id,
            next_round_id,
            games: self.games()?,
        })
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self, StoreError> {
        check_snapshot(&snapshot)?;
        Ok(Self::from_parts(
            snapshot.games,
            snapshot.next_game_id,
            snapshot.next_round_id,
        ))
    }

    /// Writes the snapshot to a sibling temp file and renames it over `path`,
    /// so a failed write leaves the previous snapshot intact.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let snapshot = self.snapshot()?;
        let mut body = serde_json::to_string_pretty(&snapshot)?;
        body.push('\n');
        let tmp = temp_path(path);
        if let Err(e) = fs::write(&tmp, body).and_then(|()| fs::rename(&tmp, path)) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        tracing::debug!(
            path = %path.display(),
            games = snapshot.games.len(),
            "store saved"
        );
        Ok(())
    }

    /// Loads a store from `path`; a missing file yields an empty store.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no snapshot, starting empty");
            return Ok(Self::new());
        }
        let text = fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(text.trim_start_matches('\u{feff}'))?;
        Self::from_snapshot(snapshot)
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn check_snapshot(snapshot: &Snapshot) -> Result<(), StoreError> {
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(corrupt(format!(
            "unsupported version {}",
            snapshot.version
        )));
    }
    let mut game_ids = HashSet::new();
    let mut round_ids = HashSet::new();
    for game in &snapshot.games {
        if !game_ids.insert(game.id) {
            return Err(corrupt(format!("duplicate game id {}", game.id)));
        }
        if game.id >= snapshot.next_game_id {
            return Err(corrupt(format!("game id {} not below next id", game.id)));
        }
        check_game(game)?;
        for round in &game.rounds {
            if !round_ids.insert(round.id) {
                return Err(corrupt(format!("duplicate round id {}", round.id)));
            }
            if round.id >= snapshot.next_round_id {
                return Err(corrupt(format!("round id {} not below next id", round.id)));
            }
        }
    }
    Ok(())
}

fn check_game(game: &Game) -> Result<(), StoreError> {
    let id = game.id;
    if game.range_min > game.range_max {
        return Err(corrupt(format!("game {id}: range_min > range_max")));
    }
    if !(game.range_min..=game.range_max).contains(&game.secret_number) {
        return Err(corrupt(format!("game {id}: secret outside range")));
    }
    let last = game.rounds.len();
    for (idx, round) in game.rounds.iter().enumerate() {
        if round.game_id != id {
            return Err(corrupt(format!("round {} belongs to game {}", round.id, round.game_id)));
        }
        if round.number as usize != idx + 1 {
            return Err(corrupt(format!("game {id}: round numbers not contiguous")));
        }
        if round.guess.is_some() != round.status.is_some() {
            return Err(corrupt(format!("round {}: guess and status out of step", round.id)));
        }
        if round.status.is_none() && idx + 1 != last {
            return Err(corrupt(format!("game {id}: unresolved round {} is not current", round.id)));
        }
    }
    replay_game(game)
}

/// Replays the stored rounds against the game's secret: every range must be
/// the one the previous round derives, every status the one its guess earns,
/// and `is_over` must be set exactly by a correct last round.
fn replay_game(game: &Game) -> Result<(), StoreError> {
    let id = game.id;
    let mut replay = Game {
        rounds: Vec::with_capacity(game.rounds.len()),
        is_over: false,
        ..game.clone()
    };
    for round in &game.rounds {
        let spec = replay
            .next_round_spec()
            .map_err(|e| corrupt(format!("game {id}: round {}: {e}", round.id)))?;
        if (round.range_min, round.range_max) != (spec.range_min, spec.range_max) {
            return Err(corrupt(format!(
                "round {}: range {}..{} does not follow from the previous round (expected {}..{})",
                round.id, round.range_min, round.range_max, spec.range_min, spec.range_max
            )));
        }
        let mut expected = Round::new(round.id, id, spec);
        if let Some(guess) = round.guess {
            let status = expected
                .classify(guess, game.secret_number)
                .map_err(|e| corrupt(e.to_string()))?;
            if round.status != Some(status) {
                return Err(corrupt(format!(
                    "round {}: status does not match guess {guess} (expected {})",
                    round.id,
                    status.as_str()
                )));
            }
            replay.is_over = status == GuessStatus::Correct;
        }
        replay.rounds.push(expected);
    }
    if replay.is_over != game.is_over {
        return Err(corrupt(format!("game {id}: is_over does not match its rounds")));
    }
    Ok(())
}

fn corrupt(msg: String) -> StoreError {
    StoreError::Corrupt(msg)
}
