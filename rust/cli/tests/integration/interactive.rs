use crate::helpers::cli_runner::CliRunner;
use serial_test::serial;

#[test]
#[serial]
fn play_prompts_then_suspends_on_quit() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["play", "--seed", "3"], "easy\n1\n10\nq\n");
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    assert!(res.stdout.contains("Difficulty (easy/hard): "));
    assert!(res.stdout.contains("Minimum: "));
    assert!(res.stdout.contains("Maximum: "));
    assert!(res.stdout.contains("Game 1: easy 1..10"));
    assert!(res.stdout.contains("Game 1 saved. Resume with: numguess resume --id 1"));

    let res = cli.run(&["games"]);
    assert_eq!(res.stdout.trim(), "Game 1: easy 1..10, 1 round, in progress");
}

#[test]
#[serial]
fn resume_finishes_a_suspended_game() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(
        &["play", "--difficulty", "hard", "--min", "1", "--max", "10", "--seed", "21"],
        "",
    );
    assert_eq!(res.exit_code, 0);

    let secret = cli.secret(1);
    let wrong = if secret == 10 { 9 } else { 10 };
    let input = format!("{wrong}\n{secret}\n");
    let res = cli.run_with_input(&["resume", "--id", "1"], &input);
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    assert!(res.stdout.contains("Round 1 guess (1..10): "));
    assert!(res.stdout.contains("Round 2 guess (1..10): "));
    assert!(res.stdout.contains(&format!("{secret} is correct!")));
    assert!(res.stdout.contains("Solved in 2 round(s)."));

    let res = cli.run_with_input(&["resume", "--id", "1"], "");
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Error: Game 1 is over."));
}

#[test]
#[serial]
fn invalid_answers_are_reprompted() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(
        &["play", "--difficulty", "hard", "--min", "1", "--max", "10"],
        "seven\n99\nquit\n",
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("Error: seven is not an integer"));
    assert!(res.stdout.contains("99 is outside the range 1..10."));
    assert_eq!(res.stdout.matches("guess (1..10): ").count(), 3);
}

#[test]
#[serial]
fn resume_unknown_game_fails() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["resume", "--id", "4"], "");
    assert_eq!(res.exit_code, 2);
    assert_eq!(res.stderr.trim(), "Error: Game 4 not found");
}
