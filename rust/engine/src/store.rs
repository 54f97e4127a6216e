//! In-memory repository of games.
//!
//! The store hands out ids the way a database sequence would and serializes
//! mutations per game: every game sits behind its own mutex, so deriving the
//! next round and resolving the current one never interleave for the same
//! game while different games proceed independently.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use thiserror::Error;

use crate::errors::GameError;
use crate::game::{Game, GameId, GuessInput, NewGame};
use crate::round::{GuessStatus, Round};
use crate::source::NumberSource;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Game {0} not found")]
    GameNotFound(GameId),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("game storage lock poisoned")]
    StoragePoisoned,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("corrupt snapshot: {0}")]
    Corrupt(String),
}

#[derive(Debug)]
pub struct GameStore {
    games: RwLock<BTreeMap<GameId, Arc<Mutex<Game>>>>,
    next_game_id: AtomicU64,
    next_round_id: AtomicU64,
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore {
    pub fn new() -> Self {
        Self::from_parts(Vec::new(), 1, 1)
    }

    pub(crate) fn from_parts(games: Vec<Game>, next_game_id: u64, next_round_id: u64) -> Self {
        let games = games
            .into_iter()
            .map(|g| (g.id(), Arc::new(Mutex::new(g))))
            .collect();
        Self {
            games: RwLock::new(games),
            next_game_id: AtomicU64::new(next_game_id),
            next_round_id: AtomicU64::new(next_round_id),
        }
    }

    pub(crate) fn next_ids(&self) -> (u64, u64) {
        (
            self.next_game_id.load(Ordering::SeqCst),
            self.next_round_id.load(Ordering::SeqCst),
        )
    }

    pub fn create_game(
        &self,
        input: NewGame,
        source: &mut dyn NumberSource,
    ) -> Result<GameId, StoreError> {
        input.validate()?;
        let id = self.next_game_id.fetch_add(1, Ordering::SeqCst);
        let game = Game::new(id, input, source)?;
        let mut guard = self
            .games
            .write()
            .map_err(|_| StoreError::StoragePoisoned)?;
        guard.insert(id, Arc::new(Mutex::new(game)));
        Ok(id)
    }

    /// Snapshot of one game.
    pub fn game(&self, id: GameId) -> Result<Game, StoreError> {
        let handle = self.handle(id)?;
        let game = lock(&handle)?;
        Ok(game.clone())
    }

    /// Snapshots of all games, ordered by id.
    pub fn games(&self) -> Result<Vec<Game>, StoreError> {
        self.handles()?
            .iter()
            .map(|h| lock(h).map(|g| g.clone()))
            .collect()
    }

    /// Removes a game together with its rounds.
    pub fn delete_game(&self, id: GameId) -> Result<(), StoreError> {
        let mut guard = self
            .games
            .write()
            .map_err(|_| StoreError::StoragePoisoned)?;
        match guard.remove(&id) {
            Some(_) => {
                tracing::info!(game_id = id, "game deleted");
                Ok(())
            }
            None => Err(StoreError::GameNotFound(id)),
        }
    }

    pub fn start_round(&self, game_id: GameId) -> Result<Round, StoreError> {
        let handle = self.handle(game_id)?;
        let mut game = lock(&handle)?;
        // fail before consuming an id
        game.next_round_spec()?;
        let round_id = self.next_round_id.fetch_add(1, Ordering::SeqCst);
        Ok(game.start_round(round_id)?.clone())
    }

    /// Resolves the current round of a game; returns the status and the resolved round.
    pub fn submit_guess(
        &self,
        game_id: GameId,
        input: GuessInput,
    ) -> Result<(GuessStatus, Round), StoreError> {
        let handle = self.handle(game_id)?;
        let mut game = lock(&handle)?;
        let status = game.submit(input)?;
        let round = game
            .current_round()
            .cloned()
            .ok_or(GameError::NoCurrentRound { game_id })?;
        Ok((status, round))
    }

    /// All rounds of all games, ordered by round id.
    pub fn rounds(&self) -> Result<Vec<Round>, StoreError> {
        let mut rounds = Vec::new();
        for handle in self.handles()? {
            rounds.extend(lock(&handle)?.rounds().iter().cloned());
        }
        rounds.sort_by_key(|r| r.id());
        Ok(rounds)
    }

    pub fn rounds_for_game(&self, game_id: GameId) -> Result<Vec<Round>, StoreError> {
        let handle = self.handle(game_id)?;
        let game = lock(&handle)?;
        Ok(game.rounds().to_vec())
    }

    fn handle(&self, id: GameId) -> Result<Arc<Mutex<Game>>, StoreError> {
        let guard = self
            .games
            .read()
            .map_err(|_| StoreError::StoragePoisoned)?;
        guard.get(&id).cloned().ok_or(StoreError::GameNotFound(id))
    }

    fn handles(&self) -> Result<Vec<Arc<Mutex<Game>>>, StoreError> {
        let guard = self
            .games
            .read()
            .map_err(|_| StoreError::StoragePoisoned)?;
        Ok(guard.values().cloned().collect())
    }
}

fn lock(handle: &Mutex<Game>) -> Result<MutexGuard<'_, Game>, StoreError> {
    handle.lock().map_err(|_| StoreError::StoragePoisoned)
}
