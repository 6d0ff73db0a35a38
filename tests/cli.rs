//! Spawns the `semval` binary and checks verdicts and exit codes.

use std::process::{Command, Output};

fn semval(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_semval"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run semval")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn valid_and_invalid() {
    let output = semval(&["email", "hi@example.com"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "valid");

    let output = semval(&["ip", "--v4", "::1"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "invalid");

    assert_eq!(semval(&["int", "-5", "--min", "-10", "--max", "0"]).status.code(), Some(0));
    assert_eq!(semval(&["int", "042"]).status.code(), Some(1));
    assert_eq!(semval(&["url", "--require-query", "https://example.com/"]).status.code(), Some(1));
    assert_eq!(semval(&["date", "2025-02-30"]).status.code(), Some(1));
    assert_eq!(semval(&["datetime", "2025-09-17T23:45:00+00:00"]).status.code(), Some(0));
}

#[test]
fn booleans_have_three_outcomes() {
    let output = semval(&["bool", "yes"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "true");

    let output = semval(&["bool", "off"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "false");

    let output = semval(&["bool", "maybe"]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "indeterminate");
}

#[test]
fn custom_format() {
    assert_eq!(semval(&["date", "--format", "d/m/Y", "17/09/2025"]).status.code(), Some(0));
    assert_eq!(semval(&["time", "--format", "g:i a", "1:30 pm"]).status.code(), Some(0));
}

#[test]
fn usage_errors() {
    assert_eq!(semval(&["date", "--format", "Y-m-dT", "2025-09-17"]).status.code(), Some(3));
    assert_eq!(semval(&["frobnicate", "x"]).status.code(), Some(3));
    assert_eq!(semval(&["--config", "/definitely/not/here.toml", "email", "a@b.co"]).status.code(), Some(3));
}

#[test]
fn json_report() {
    let output = semval(&["--json", "bool", "maybe"]);
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["check"], "bool");
    assert_eq!(report["value"], "maybe");
    assert_eq!(report["valid"], false);
    assert_eq!(report["truth"], "indeterminate");

    let output = semval(&["url", "--json", "https://example.com"]);
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["valid"], true);
    assert!(report.get("truth").is_none());
}
