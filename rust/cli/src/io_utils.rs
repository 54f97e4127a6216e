//! Input helpers and snapshot file access shared by the commands.

use crate::config::Config;
use crate::error::CliError;
use fs4::fs_std::FileExt;
use numguess_engine::store::GameStore;
use std::fs::{File, OpenOptions};
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Returns the trimmed line, or `None` on EOF or read errors.
///
/// # Example
///
/// ```rust,no_run
/// use std::io::{self, BufRead};
/// # use numguess_cli::io_utils::read_stdin_line;
///
/// let stdin = io::stdin();
/// let mut handle = stdin.lock();
/// if let Some(line) = read_stdin_line(&mut handle) {
///     println!("You entered: {}", line);
/// }
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Loads the game store from the configured snapshot path for reading.
///
/// Saves replace the snapshot by rename, so an unlocked read always sees a
/// complete file. Anything that writes goes through [`update_store`].
pub fn open_store(cfg: &Config) -> Result<GameStore, CliError> {
    Ok(GameStore::load(&cfg.data_path)?)
}

/// Loads the store, applies `f` and saves the result, all under the
/// snapshot's exclusive lock so concurrent `numguess` processes take turns.
///
/// Nothing is written when `f` fails.
pub fn update_store<T>(
    cfg: &Config,
    f: impl FnOnce(&GameStore) -> Result<T, CliError>,
) -> Result<T, CliError> {
    let _lock = StoreLock::acquire(Path::new(&cfg.data_path))?;
    let store = GameStore::load(&cfg.data_path)?;
    let value = f(&store)?;
    store.save(&cfg.data_path)?;
    Ok(value)
}

/// Exclusive advisory lock on `<snapshot>.lock`, released on drop.
#[derive(Debug)]
pub struct StoreLock {
    _file: File,
    path: PathBuf,
}

impl StoreLock {
    /// Blocks until the lock for `snapshot` is held.
    pub fn acquire(snapshot: &Path) -> Result<Self, CliError> {
        let mut name = snapshot.as_os_str().to_owned();
        name.push(".lock");
        let path = PathBuf::from(name);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| lock_error(&path, e))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&path)
            .map_err(|e| lock_error(&path, e))?;
        file.lock_exclusive().map_err(|e| lock_error(&path, e))?;
        tracing::trace!(lock_path = %path.display(), "snapshot lock acquired");
        Ok(Self { _file: file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn lock_error(path: &Path, e: std::io::Error) -> CliError {
    CliError::Storage(format!("cannot lock {}: {}", path.display(), e))
}
