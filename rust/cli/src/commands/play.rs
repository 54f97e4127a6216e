//! # Play Command
//!
//! Interactive number guessing against a freshly drawn secret.
//!
//! Settings missing from the command line, the environment and the config
//! file are asked for one at a time; an invalid answer prints the validation
//! message and asks again. Every round and every guess is saved as soon as it
//! happens, so quitting with `q` (or closing stdin) leaves a game that
//! `resume` can pick up. The snapshot lock is taken per step, never while
//! waiting for input.

use crate::commands::GameArgs;
use crate::config::{Config, ConfigResolved, ValueSource};
use crate::error::CliError;
use crate::formatters::{format_range, response_message};
use crate::io_utils::{open_store, read_stdin_line, update_store};
use crate::ui;
use crate::validation::{ParseResult, parse_bound, parse_difficulty, parse_guess_input};
use numguess_engine::errors::GameError;
use numguess_engine::game::{GameId, GuessInput, NewGame};
use numguess_engine::round::GuessStatus;
use numguess_engine::source::seeded_source;
use std::io::{BufRead, Write};

/// Handle the play command: create a game and run its rounds.
///
/// # Returns
///
/// * `Ok(())` when the game is won or the player quits
/// * `Err(CliError)` on invalid flags, engine rule violations or I/O errors
pub fn handle_play_command(
    args: GameArgs,
    resolved: &ConfigResolved,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = &resolved.config;
    let Some(input) = gather_new_game(&args, resolved, out, err, stdin)? else {
        writeln!(out)?;
        writeln!(out, "Goodbye!")?;
        return Ok(());
    };

    let seed = args.seed(cfg);
    let game_id = update_store(cfg, |store| {
        Ok(store.create_game(input, &mut seeded_source(seed))?)
    })?;
    tracing::debug!(game_id, seed, "interactive game created");

    writeln!(
        out,
        "Game {}: {} {}",
        game_id,
        input.difficulty,
        format_range(input.range_min, input.range_max)
    )?;
    play_rounds(game_id, cfg, out, err, stdin)
}

/// Handle the resume command: continue an unfinished game.
pub fn handle_resume_command(
    id: GameId,
    cfg: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let game = open_store(cfg)?.game(id)?;
    if game.is_over() {
        return Err(GameError::GameOver { game_id: id }.into());
    }
    writeln!(
        out,
        "Resuming game {}: {} {}, {} round(s) played",
        id,
        game.difficulty(),
        format_range(game.range_min(), game.range_max()),
        game.rounds().iter().filter(|r| r.is_resolved()).count()
    )?;
    play_rounds(id, cfg, out, err, stdin)
}

fn play_rounds(
    game_id: GameId,
    cfg: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    loop {
        let round = update_store(cfg, |store| {
            let game = store.game(game_id)?;
            match game.current_round() {
                Some(current) if !current.is_resolved() => Ok(current.clone()),
                _ => Ok(store.start_round(game_id)?),
            }
        })?;
        let prompt = format!(
            "Round {} guess ({}): ",
            round.number(),
            format_range(round.range_min(), round.range_max())
        );

        let guess = loop {
            ui::prompt(out, &prompt)?;
            let Some(line) = read_stdin_line(stdin) else {
                return suspend(out, game_id);
            };
            match parse_guess_input(&line) {
                ParseResult::Guess(g) => break g,
                ParseResult::Quit => return suspend(out, game_id),
                ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            }
        };

        let input = GuessInput {
            round_id: round.id(),
            guess,
        };
        let (status, resolved) =
            update_store(cfg, |store| Ok(store.submit_guess(game_id, input)?))?;
        if let Some(msg) = response_message(&resolved) {
            writeln!(out, "{}", msg)?;
        }
        if status == GuessStatus::Correct {
            writeln!(out, "Solved in {} round(s).", resolved.number())?;
            return Ok(());
        }
    }
}

fn suspend(out: &mut dyn Write, game_id: GameId) -> Result<(), CliError> {
    writeln!(out)?;
    writeln!(
        out,
        "Game {} saved. Resume with: numguess resume --id {}",
        game_id, game_id
    )?;
    Ok(())
}

/// Collects creation settings; `None` when the player quits while prompted.
fn gather_new_game(
    args: &GameArgs,
    resolved: &ConfigResolved,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<NewGame>, CliError> {
    let ConfigResolved { config, sources } = resolved;

    let difficulty = match &args.difficulty {
        Some(s) => parse_difficulty(s).map_err(CliError::InvalidInput)?,
        None if sources.difficulty != ValueSource::Default => config.difficulty,
        None => match prompt_until(out, err, stdin, "Difficulty (easy/hard): ", parse_difficulty)? {
            Some(d) => d,
            None => return Ok(None),
        },
    };

    let min_fixed = args.min.is_some() || sources.range_min != ValueSource::Default;
    let max_fixed = args.max.is_some() || sources.range_max != ValueSource::Default;
    loop {
        let range_min = match bound(&args.min, min_fixed, config.range_min, "Minimum: ", out, err, stdin)? {
            Some(v) => v,
            None => return Ok(None),
        };
        let range_max = match bound(&args.max, max_fixed, config.range_max, "Maximum: ", out, err, stdin)? {
            Some(v) => v,
            None => return Ok(None),
        };
        let input = NewGame {
            difficulty,
            range_min,
            range_max,
        };
        match input.validate() {
            Ok(()) => return Ok(Some(input)),
            // nothing to re-ask
            Err(e) if min_fixed && max_fixed => return Err(e.into()),
            Err(e) => ui::write_error(err, &e.to_string())?,
        }
    }
}

fn bound(
    flag: &Option<String>,
    fixed: bool,
    configured: i64,
    text: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<i64>, CliError> {
    match flag {
        Some(s) => parse_bound(s).map(Some).map_err(CliError::InvalidInput),
        None if fixed => Ok(Some(configured)),
        None => prompt_until(out, err, stdin, text, parse_bound),
    }
}

/// Prompts until `parse` accepts the answer; `None` on EOF or quit.
fn prompt_until<T>(
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
    text: &str,
    parse: fn(&str) -> Result<T, String>,
) -> Result<Option<T>, CliError> {
    loop {
        ui::prompt(out, text)?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        if parse_guess_input(&line) == ParseResult::Quit {
            return Ok(None);
        }
        match parse(&line) {
            Ok(v) => return Ok(Some(v)),
            Err(msg) => ui::write_error(err, &msg)?,
        }
    }
}
