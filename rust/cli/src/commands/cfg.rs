//! Configuration command handler.
//!
//! Implements the `cfg` command, which displays the resolved configuration
//! with the source of each value (default, environment, or configuration
//! file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "difficulty": {
//!     "value": "hard",
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Loads the configuration with source tracking and prints it as JSON.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "difficulty": {
            "value": config.difficulty,
            "source": sources.difficulty,
        },
        "range_min": {
            "value": config.range_min,
            "source": sources.range_min,
        },
        "range_max": {
            "value": config.range_max,
            "source": sources.range_max,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "data_path": {
            "value": config.data_path,
            "source": sources.data_path,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
