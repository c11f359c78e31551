//! End-to-end routing: alias → action → delegated script → exit code.

mod common;

use common::{console, fake_interpreter};
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::tempdir;

#[test]
fn default_invocation_runs_the_analysis() {
    let home = tempdir().unwrap();
    let interpreter = fake_interpreter(home.path(), 0);

    console(home.path())
        .env("FACTOR_PYTHON", &interpreter)
        .assert()
        .success()
        .stdout(contains("launched:run_analysis.py"));
}

#[test]
fn short_run_alias_matches_the_default() {
    let home = tempdir().unwrap();
    let interpreter = fake_interpreter(home.path(), 0);

    console(home.path())
        .env("FACTOR_PYTHON", &interpreter)
        .arg("r")
        .assert()
        .success()
        .stdout(contains("launched:run_analysis.py"));
}

#[test]
fn each_delegating_action_reaches_its_script() {
    let cases = [
        ("schwab-full", "schwab_factor_system.py"),
        ("portfolio", "schwab_factor_system.py"),
        ("diagnostics", "run_diagnostics.py"),
        ("test", "run_diagnostics.py"),
        ("e", "test_email.py"),
        ("s", "test_schwab_connection.py"),
        ("api", "test_schwab_connection.py"),
        ("d", "factor_data_collection.py"),
        ("dash", "monitoring_dashboard.py"),
        ("m", "monitoring_dashboard.py"),
    ];

    for (token, script) in cases {
        let home = tempdir().unwrap();
        let interpreter = fake_interpreter(home.path(), 0);

        console(home.path())
            .env("FACTOR_PYTHON", &interpreter)
            .arg(token)
            .assert()
            .success()
            .stdout(contains(format!("launched:{script}")));
    }
}

#[test]
fn delegated_exit_code_is_forwarded() {
    let home = tempdir().unwrap();
    let interpreter = fake_interpreter(home.path(), 7);

    console(home.path())
        .env("FACTOR_PYTHON", &interpreter)
        .arg("run")
        .assert()
        .code(7);
}

#[test]
fn missing_interpreter_fails_without_crashing() {
    let home = tempdir().unwrap();

    console(home.path())
        .env("FACTOR_PYTHON", "no-such-interpreter-for-factor-console")
        .arg("run")
        .assert()
        .code(1)
        .stderr(contains("not found"));
}

#[test]
fn unknown_token_prints_guidance_and_fails() {
    let home = tempdir().unwrap();

    console(home.path())
        .arg("bogus")
        .assert()
        .code(1)
        .stderr(contains("Unknown command: bogus").and(contains("Usage: factor-console")));
}

#[test]
fn help_aliases_are_equivalent() {
    let home = tempdir().unwrap();

    let mut outputs = Vec::new();
    for alias in ["help", "h", "-h", "--help"] {
        let assert = console(home.path()).arg(alias).assert().success();
        outputs.push(String::from_utf8_lossy(&assert.get_output().stdout).into_owned());
    }

    for output in &outputs[1..] {
        assert_eq!(output, &outputs[0]);
    }
    assert!(outputs[0].contains("Usage: factor-console"));
}

#[test]
fn help_lists_every_command() {
    let home = tempdir().unwrap();

    console(home.path())
        .arg("help")
        .assert()
        .success()
        .stdout(
            contains("run")
                .and(contains("schwab-enhanced"))
                .and(contains("diagnostics"))
                .and(contains("email"))
                .and(contains("schwab"))
                .and(contains("collect"))
                .and(contains("dashboard"))
                .and(contains("setup"))
                .and(contains("status"))
                .and(contains("help")),
        );
}
