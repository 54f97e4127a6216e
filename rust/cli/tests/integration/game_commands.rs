use crate::helpers::cli_runner::CliRunner;
use serde_json::Value;
use serial_test::serial;

fn new_game(cli: &CliRunner, difficulty: &str) -> Value {
    let res = cli.run(&[
        "new",
        "--difficulty",
        difficulty,
        "--min",
        "1",
        "--max",
        "10",
        "--seed",
        "5",
    ]);
    assert_eq!(res.exit_code, 0, "new failed: {}", res.stderr);
    serde_json::from_str(&res.stdout).expect("summary json")
}

/// A wrong guess for `secret` in 1..=10 and the word the response uses.
fn miss(secret: i64) -> (i64, &'static str) {
    if secret == 1 { (2, "too high") } else { (1, "too low") }
}

#[test]
#[serial]
fn new_prints_summary_without_secret() {
    let cli = CliRunner::new();
    let json = new_game(&cli, "easy");
    assert_eq!(json["id"], 1);
    assert_eq!(json["difficulty"], "easy");
    assert_eq!(json["number_of_rounds"], 1);
    assert_eq!(json["is_over"], false);
    assert_eq!(json["current_round"]["id"], 1);
    assert_eq!(json["current_round"]["number"], 1);
    assert!(json["current_round"]["status"].is_null());
    assert!(json.get("secret_number").is_none());
    assert!(cli.data_path().exists());
    assert!(cli.dir().join("games.json.lock").exists());
}

#[test]
#[serial]
fn guess_round_and_errors_follow_game_rules() {
    let cli = CliRunner::new();
    new_game(&cli, "hard");
    let secret = cli.secret(1);
    let (wrong, verdict) = miss(secret);
    let wrong = wrong.to_string();

    let res = cli.run(&["guess", "--game", "1", "--round", "1", "--value", &wrong]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout.trim(), format!("{wrong} is {verdict}."));

    let again = cli.run(&["guess", "--game", "1", "--round", "1", "--value", &wrong]);
    assert_eq!(again.exit_code, 2);
    assert!(again.stderr.contains("Error: Round 1 status has already been set."));

    let res = cli.run(&["round", "--game", "1"]);
    assert_eq!(res.exit_code, 0);
    let round: Value = serde_json::from_str(&res.stdout).unwrap();
    assert_eq!(round["id"], 2);
    assert_eq!(round["number"], 2);
    assert_eq!(round["range_min"], 1);
    assert_eq!(round["range_max"], 10);

    let stale = cli.run(&["guess", "--game", "1", "--round", "1", "--value", "3"]);
    assert_eq!(stale.exit_code, 2);
    assert!(stale.stderr.contains("Error: Round 1 is not current."));

    let pending = cli.run(&["round", "--game", "1"]);
    assert_eq!(pending.exit_code, 2);
    assert!(pending.stderr.contains(
        "Error: Current round 2 status must be set prior to creating a new round."
    ));

    let value = secret.to_string();
    let res = cli.run(&["guess", "--game", "1", "--round", "2", "--value", &value]);
    assert_eq!(res.stdout.trim(), format!("{secret} is correct!"));

    let over = cli.run(&["round", "--game", "1"]);
    assert_eq!(over.exit_code, 2);
    assert!(over.stderr.contains("Error: Game 1 is over."));
}

#[test]
#[serial]
fn easy_rounds_narrow_after_a_miss() {
    let cli = CliRunner::new();
    new_game(&cli, "easy");
    let secret = cli.secret(1);
    let (wrong, _) = miss(secret);
    let value = wrong.to_string();
    cli.run(&["guess", "--game", "1", "--round", "1", "--value", &value]);

    let res = cli.run(&["round", "--game", "1"]);
    let round: Value = serde_json::from_str(&res.stdout).unwrap();
    if wrong < secret {
        assert_eq!(round["range_min"], wrong + 1);
        assert_eq!(round["range_max"], 10);
    } else {
        assert_eq!(round["range_min"], 1);
        assert_eq!(round["range_max"], wrong - 1);
    }
}

#[test]
#[serial]
fn padded_integers_are_accepted_and_words_rejected() {
    let cli = CliRunner::new();
    new_game(&cli, "hard");
    let res = cli.run(&["guess", "--game", "1", "--round", "1", "--value", "abc"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Error: Invalid input: abc is not an integer"));

    let res = cli.run(&["guess", "--game", "1", "--round", "1", "--value", "42    "]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout.trim(), "42 is outside the range 1..10.");
}

#[test]
#[serial]
fn inverted_range_is_rejected_without_creating_a_game() {
    let cli = CliRunner::new();
    let res = cli.run(&["new", "--min", "10", "--max", "1"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("range_min 10 is greater than range_max 1"));

    let res = cli.run(&["new", "--difficulty", "EASY"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Must be one of: easy, hard."));

    let res = cli.run(&["games"]);
    assert_eq!(res.stdout.trim(), "No games to show.");
}

#[test]
#[serial]
fn unknown_game_is_reported() {
    let cli = CliRunner::new();
    for args in [
        vec!["game", "--id", "9"],
        vec!["round", "--game", "9"],
        vec!["rounds", "--game", "9"],
        vec!["delete", "--id", "9"],
        vec!["guess", "--game", "9", "--round", "1", "--value", "1"],
    ] {
        let res = cli.run(&args);
        assert_eq!(res.exit_code, 2, "{:?}", args);
        assert_eq!(res.stderr.trim(), "Error: Game 9 not found", "{:?}", args);
    }
}

#[test]
#[serial]
fn listings_and_delete_cascade() {
    let cli = CliRunner::new();
    new_game(&cli, "hard");
    new_game(&cli, "easy");

    let res = cli.run(&["games"]);
    let lines: Vec<&str> = res.stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Game 1: hard 1..10, 1 round, in progress",
            "Game 2: easy 1..10, 1 round, in progress",
        ]
    );

    let res = cli.run(&["rounds"]);
    assert_eq!(res.stdout.lines().count(), 2);
    assert!(res.stdout.contains("Round 2 (game 2, #1): 1..10 - awaiting guess"));

    let res = cli.run(&["delete", "--id", "1"]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout.trim(), "Game 1 deleted.");

    let res = cli.run(&["rounds"]);
    assert_eq!(res.stdout.lines().count(), 1);
    assert!(res.stdout.contains("(game 2, #1)"));

    cli.run(&["delete", "--id", "2"]);
    let res = cli.run(&["rounds"]);
    assert_eq!(res.stdout.trim(), "No rounds to show.");
}

#[test]
#[serial]
fn corrupt_snapshot_is_a_storage_error() {
    let cli = CliRunner::new();
    std::fs::write(cli.data_path(), "{ not json").unwrap();
    let res = cli.run(&["games"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.starts_with("Error: Storage error:"), "{}", res.stderr);
}
