use crate::helpers::cli_runner::CliRunner;
use serde_json::Value;
use serial_test::serial;

fn cfg_json(cli: &CliRunner, env: &[(&str, &str)]) -> Value {
    let res = cli.run_with_env(&["cfg"], env);
    assert_eq!(res.exit_code, 0, "cfg failed: {}", res.stderr);
    serde_json::from_str(&res.stdout).expect("cfg json")
}

#[test]
#[serial]
fn defaults_are_reported_as_default() {
    let cli = CliRunner::new();
    let json = cfg_json(&cli, &[]);
    assert_eq!(json["difficulty"]["value"], "hard");
    assert_eq!(json["difficulty"]["source"], "default");
    assert_eq!(json["range_min"]["value"], 1);
    assert_eq!(json["range_max"]["value"], 100);
    assert!(json["seed"]["value"].is_null());
    // the runner always points the store at its temp dir
    assert_eq!(json["data_path"]["source"], "env");
}

#[test]
#[serial]
fn env_overrides_file() {
    let cli = CliRunner::new();
    let file = cli.dir().join("numguess.toml");
    std::fs::write(
        &file,
        "difficulty = \"easy\"\nrange_min = 5\nrange_max = 50\nseed = 7\n",
    )
    .unwrap();
    let path = file.to_string_lossy().into_owned();

    let json = cfg_json(
        &cli,
        &[("NUMGUESS_CONFIG", path.as_str()), ("NUMGUESS_MAX", "60"), ("NUMGUESS_SEED", "9")],
    );
    assert_eq!(json["difficulty"]["value"], "easy");
    assert_eq!(json["difficulty"]["source"], "file");
    assert_eq!(json["range_min"]["value"], 5);
    assert_eq!(json["range_min"]["source"], "file");
    assert_eq!(json["range_max"]["value"], 60);
    assert_eq!(json["range_max"]["source"], "env");
    assert_eq!(json["seed"]["value"], 9);
    assert_eq!(json["seed"]["source"], "env");
}

#[test]
#[serial]
fn flags_override_env() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(
        &["new", "--difficulty", "hard", "--max", "20"],
        &[("NUMGUESS_DIFFICULTY", "easy"), ("NUMGUESS_MIN", "3"), ("NUMGUESS_MAX", "30")],
    );
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(json["difficulty"], "hard");
    assert_eq!(json["range_min"], 3);
    assert_eq!(json["range_max"], 20);
}

#[test]
#[serial]
fn same_seed_draws_same_secret() {
    let cli = CliRunner::new();
    let env = [("NUMGUESS_SEED", "1234")];
    cli.run_with_env(&["new"], &env);
    cli.run_with_env(&["new"], &env);
    assert_eq!(cli.secret(1), cli.secret(2));
}

#[test]
#[serial]
fn invalid_config_stops_every_command() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(&["games"], &[("NUMGUESS_MIN", "50"), ("NUMGUESS_MAX", "10")]);
    assert_eq!(res.exit_code, 2);
    assert_eq!(
        res.stderr.trim(),
        "Error: Invalid configuration: range_min 50 is greater than range_max 10"
    );

    let res = cli.run_with_env(&["cfg"], &[("NUMGUESS_DIFFICULTY", "medium")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid difficulty"));
}
