use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// The demo binary with a deterministic environment.
fn demo() -> Command {
    let mut cmd = Command::cargo_bin("cmdopts-demo").expect("binary is built");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// Successful launches
// ---------------------------------------------------------------------------

#[test]
fn launch_prints_resolved_config() {
    demo()
        .args(["-d", "--open", "notes.txt", "-g", "1280x800+10-5", "a", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("development: true"))
        .stdout(predicate::str::contains("open: notes.txt"))
        .stdout(predicate::str::contains("geometry: 1280x800+10-5"))
        .stdout(predicate::str::contains("arguments: a b"));
}

#[test]
fn launch_without_arguments() {
    demo()
        .assert()
        .success()
        .stdout("development: false\nopen: -\ngeometry: -\narguments: \n");
}

#[test]
fn help_goes_to_stdout() {
    demo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Usage: cmdopts-demo [OPTIONS] [ARGS]...\n\n",
        ))
        .stdout(predicate::str::contains("-d  --development   Enable development mode"))
        .stdout(predicate::str::contains("    --list-options  List declared options and exit"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn list_options_as_json() {
    let output = demo().arg("--list-options=json").output().unwrap();
    assert!(output.status.success());

    let listed: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let options = listed.as_array().unwrap();
    assert_eq!(options.len(), 7);
    assert_eq!(options[0]["long_name"], "help");
    assert_eq!(options[0]["short_char"], "h");
    assert_eq!(options[3]["kind"], "required");
    assert!(options[3]["pattern"].as_str().unwrap().starts_with(r"(\d{3,4})"));
}

#[test]
fn list_options_as_text() {
    demo()
        .arg("--list-options")
        .assert()
        .success()
        .stdout(predicate::str::contains("--open -o required\n"))
        .stdout(predicate::str::contains("--no-color flag\n"));
}

#[test]
fn verbose_logs_every_dispatched_option() {
    demo()
        .args(["-v", "-d", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("development: true"))
        .stderr(predicate::str::contains("Dispatching option"))
        .stderr(predicate::str::contains("development"));
}

#[test]
fn quiet_by_default() {
    demo()
        .args(["-d", "x"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

// ---------------------------------------------------------------------------
// Usage errors
// ---------------------------------------------------------------------------

#[test]
fn unknown_option_exits_with_usage() {
    demo()
        .arg("--undefined-option")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with(
            "error: unknown option: --undefined-option\n",
        ))
        .stderr(predicate::str::contains("-h  --help"));
}

#[test]
fn rejected_geometry_exits_with_usage() {
    demo()
        .args(["--geometry", "huge"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value \"huge\" for option --geometry"));
}

#[test]
fn short_assignment_exits_with_usage() {
    demo()
        .arg("-o=file")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("short options do not take '=' values: -o=file"));
}

#[test]
fn missing_value_exits_with_usage() {
    demo()
        .arg("--open")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing value for option --open"));
}
