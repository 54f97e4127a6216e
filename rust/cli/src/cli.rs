//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "numguess", version, about = "Number guessing game")]
pub struct NumguessCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a new game interactively
    Play {
        /// easy (range narrows) or hard (range fixed)
        #[arg(long)]
        difficulty: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        min: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        max: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Continue an unfinished game interactively
    Resume {
        #[arg(long)]
        id: u64,
    },
    /// Create a game and start its first round
    New {
        #[arg(long)]
        difficulty: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        min: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        max: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Start the next round of a game
    Round {
        #[arg(long)]
        game: u64,
    },
    /// Submit a guess for the current round of a game
    Guess {
        #[arg(long)]
        game: u64,
        #[arg(long)]
        round: u64,
        #[arg(long, allow_negative_numbers = true)]
        value: String,
    },
    /// List all games
    Games,
    /// Show one game
    Game {
        #[arg(long)]
        id: u64,
        /// Include the secret number
        #[arg(long)]
        dump: bool,
    },
    /// List rounds, optionally for one game
    Rounds {
        #[arg(long)]
        game: Option<u64>,
    },
    /// Delete a game and its rounds
    Delete {
        #[arg(long)]
        id: u64,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
