use crate::helpers::cli_runner::CliRunner;
use numguess_cli::logging::TestLogSubscriber;
use serial_test::serial;
use tracing::Level;
use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;

#[test]
#[serial]
fn engine_events_carry_game_fields() {
    let cli = CliRunner::new();
    let subscriber = TestLogSubscriber::new();
    let registry = Registry::default().with(subscriber.clone().into_layer::<Registry>());

    let res = tracing::subscriber::with_default(registry, || {
        cli.run(&["new", "--difficulty", "hard", "--min", "1", "--max", "10"])
    });
    assert_eq!(res.exit_code, 0);

    let entries = subscriber.entries();
    let created = entries
        .iter()
        .find(|e| e.message.contains("game created"))
        .expect("game created event");
    assert_eq!(created.level, Level::INFO);
    assert!(created.fields.iter().any(|(k, v)| k == "game_id" && v == "1"));
    assert!(created.fields.iter().any(|(k, v)| k == "range_max" && v == "10"));

    let started = entries
        .iter()
        .find(|e| e.message.contains("round started"))
        .expect("round started event");
    assert_eq!(started.level, Level::DEBUG);
    assert!(started.fields.iter().any(|(k, v)| k == "number" && v == "1"));
}

#[test]
#[serial]
fn failed_commands_are_logged() {
    let cli = CliRunner::new();
    let subscriber = TestLogSubscriber::new();
    let registry = Registry::default().with(subscriber.clone().into_layer::<Registry>());

    let res = tracing::subscriber::with_default(registry, || cli.run(&["game", "--id", "3"]));
    assert_eq!(res.exit_code, 2);
    assert!(
        subscriber
            .entries()
            .iter()
            .any(|e| e.message.contains("command failed")
                && e.fields.iter().any(|(k, v)| k == "error" && v.contains("Game 3 not found")))
    );
}
