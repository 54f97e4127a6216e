use std::io::Cursor;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

const MANAGED_VARS: &[&str] = &[
    "NUMGUESS_CONFIG",
    "NUMGUESS_DIFFICULTY",
    "NUMGUESS_MIN",
    "NUMGUESS_MAX",
    "NUMGUESS_SEED",
    "NUMGUESS_DATA",
];

#[derive(Debug)]
pub struct CliRunner {
    dir: TempDir,
    data_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for key in MANAGED_VARS {
            restores.push((key.to_string(), std::env::var(key).ok()));
            unsafe { std::env::remove_var(key) };
        }
        for (key, value) in pairs {
            if !MANAGED_VARS.contains(key) {
                restores.push((key.to_string(), std::env::var(key).ok()));
            }
            unsafe { std::env::set_var(key, value) };
        }
        EnvGuard { restores }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, previous) in self.restores.iter().rev() {
            match previous {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

impl CliRunner {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let data_path = dir.path().join("games.json");
        Self { dir, data_path }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_full(args, &[], "")
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        self.run_full(args, env, "")
    }

    pub fn run_with_input(&self, args: &[&str], input: &str) -> CliResult {
        self.run_full(args, &[], input)
    }

    pub fn run_full(&self, args: &[&str], env: &[(&str, &str)], input: &str) -> CliResult {
        let data = self.data_path.to_string_lossy().into_owned();
        let mut pairs = vec![("NUMGUESS_DATA", data.as_str())];
        pairs.extend_from_slice(env);
        let _guard = EnvGuard::apply(&pairs);

        let argv: Vec<String> = std::iter::once("numguess".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = numguess_cli::run_with_input(argv, &mut stdin, &mut out, &mut err);
        CliResult {
            exit_code: code,
            stdout: String::from_utf8_lossy(&out).to_string(),
            stderr: String::from_utf8_lossy(&err).to_string(),
        }
    }

    /// Secret number of a game, read through `game --dump`.
    pub fn secret(&self, game_id: u64) -> i64 {
        let id = game_id.to_string();
        let res = self.run(&["game", "--id", &id, "--dump"]);
        assert_eq!(res.exit_code, 0, "dump failed: {}", res.stderr);
        let json: serde_json::Value = serde_json::from_str(&res.stdout).expect("dump json");
        json["secret_number"].as_i64().expect("secret_number")
    }
}
