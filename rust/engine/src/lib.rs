//! # numguess-engine: Number Guessing Game Core
//!
//! The game/round state machine behind numguess. A game hides a secret
//! number inside a closed range; players resolve rounds one guess at a time
//! until a guess hits. On `easy` difficulty the window narrows after every
//! high or low answer, on `hard` it never does.
//!
//! ## Core Modules
//!
//! - [`game`] - Game configuration, round derivation and guess submission
//! - [`round`] - Round state and guess classification
//! - [`source`] - Injectable randomness for the secret number
//! - [`view`] - Summary and dump representations of a game
//! - [`store`] - In-memory repository with per-game serialization
//! - [`persist`] - JSON snapshot save/load for the store
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use numguess_engine::game::{Difficulty, GuessInput, NewGame};
//! use numguess_engine::round::GuessStatus;
//! use numguess_engine::source::seeded_source;
//! use numguess_engine::store::GameStore;
//!
//! let store = GameStore::new();
//! let input = NewGame { difficulty: Difficulty::Hard, range_min: 1, range_max: 100 };
//! let game_id = store.create_game(input, &mut seeded_source(42)).unwrap();
//!
//! let round = store.start_round(game_id).unwrap();
//! assert_eq!((round.range_min(), round.range_max()), (1, 100));
//!
//! let (status, _) = store
//!     .submit_guess(game_id, GuessInput { round_id: round.id(), guess: 50 })
//!     .unwrap();
//! assert_ne!(status, GuessStatus::Invalid);
//! ```

pub mod errors;
pub mod game;
pub mod persist;
pub mod round;
pub mod source;
pub mod store;
pub mod view;
