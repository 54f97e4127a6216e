//! Command handler modules for the numguess CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) and, for the
//!   interactive commands, the input stream (`&mut dyn BufRead`)
//! - Every mutation is written back to the snapshot file before output
//!   reports it

mod cfg;
mod delete;
mod guess;
mod list;
mod new;
mod play;
mod round;

pub use cfg::handle_cfg_command;
pub use delete::handle_delete_command;
pub use guess::handle_guess_command;
pub use list::{handle_game_command, handle_games_command, handle_rounds_command};
pub use new::{GameArgs, handle_new_command};
pub use play::{handle_play_command, handle_resume_command};
pub use round::handle_round_command;
