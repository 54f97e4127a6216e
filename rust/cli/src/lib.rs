//! # numguess CLI Library
//!
//! This library provides the command-line front end for the numguess engine.
//! Games live in a JSON snapshot file (see [`config`] for where it is), so
//! every subcommand loads the store, applies one operation and writes it back.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand. [`run_with_input`] does the same with an
//! injected input stream for the interactive commands.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["numguess", "play", "--difficulty", "easy", "--min", "1", "--max", "10"];
//! let code = numguess_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play a new game interactively
//! - `resume`: Continue an unfinished game
//! - `new`: Create a game and start its first round
//! - `round`: Start the next round of a game
//! - `guess`: Submit a guess for the current round
//! - `games` / `game`: Show game summaries
//! - `rounds`: List rounds
//! - `delete`: Delete a game and its rounds
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, NumguessCli};
use commands::{
    GameArgs, handle_cfg_command, handle_delete_command, handle_game_command,
    handle_games_command, handle_guess_command, handle_new_command, handle_play_command,
    handle_resume_command, handle_round_command, handle_rounds_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &[
    "play", "resume", "new", "round", "guess", "games", "game", "rounds", "delete", "cfg",
];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
/// Interactive commands read from the process stdin.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Like [`run`], reading interactive input from `stdin`.
///
/// # Example
///
/// ```no_run
/// use std::io::{self, Cursor};
/// let mut input = Cursor::new(b"hard\n1\n10\nq\n".to_vec());
/// let code = numguess_cli::run_with_input(
///     ["numguess", "play"],
///     &mut input,
///     &mut io::stdout(),
///     &mut io::stderr(),
/// );
/// assert_eq!(code, 0);
/// ```
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match NumguessCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage(e, out, err),
    };

    // cfg reports its own configuration errors
    if let Commands::Cfg = cli.cmd {
        return match handle_cfg_command(out, err) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            write_or_exit!(err, "Error: Invalid configuration: {}", e);
            return exit_code::ERROR;
        }
    };
    let cfg = &resolved.config;

    let result = match cli.cmd {
        Commands::Play {
            difficulty,
            min,
            max,
            seed,
        } => {
            let args = GameArgs {
                difficulty,
                min,
                max,
                seed,
            };
            handle_play_command(args, &resolved, out, err, stdin)
        }
        Commands::Resume { id } => handle_resume_command(id, cfg, out, err, stdin),
        Commands::New {
            difficulty,
            min,
            max,
            seed,
        } => {
            let args = GameArgs {
                difficulty,
                min,
                max,
                seed,
            };
            handle_new_command(args, cfg, out)
        }
        Commands::Round { game } => handle_round_command(game, cfg, out),
        Commands::Guess { game, round, value } => {
            handle_guess_command(game, round, &value, cfg, out)
        }
        Commands::Games => handle_games_command(cfg, out),
        Commands::Game { id, dump } => handle_game_command(id, dump, cfg, out),
        Commands::Rounds { game } => handle_rounds_command(game, cfg, out),
        Commands::Delete { id } => handle_delete_command(id, cfg, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            if ui::write_error(err, &e.to_string()).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}

fn report_usage(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "numguess: number guessing game");
            write_or_exit!(err, "Usage: numguess <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: numguess --help");
            exit_code::ERROR
        }
    }
}
