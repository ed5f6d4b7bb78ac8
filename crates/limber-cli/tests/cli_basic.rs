//! Basic CLI E2E tests.
//!
//! Each test runs the built binary against a throwaway HOME so state never
//! leaks between tests or into the developer's real data directory.

use std::path::Path;
use std::process::Command;

fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_limber"))
        .env("HOME", home)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn status_reports_default_state() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["status"]);
    assert_eq!(code, 0, "status failed");

    let snapshot: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(snapshot["type"], "StateSnapshot");
    assert_eq!(snapshot["remaining_secs"], 2400);
    assert_eq!(snapshot["is_running"], false);
    assert_eq!(snapshot["formatted_time"], "40:00");
}

#[test]
fn start_then_pause_round_trips() {
    let home = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(home.path(), &["start"]);
    assert_eq!(code, 0, "start failed");
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["type"], "TimerStarted");

    let (stdout, _, code) = run_cli(home.path(), &["pause"]);
    assert_eq!(code, 0, "pause failed");
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["type"], "TimerPaused");
    assert_eq!(event["remaining_secs"], 2400);
}

#[test]
fn set_applies_reset_validation_policy() {
    let home = tempfile::tempdir().unwrap();

    // 90 minutes is out of range and resets to 0; the empty total then
    // clamps up to the 1-second minimum.
    let (stdout, _, code) = run_cli(home.path(), &["set", "--minutes", "90"]);
    assert_eq!(code, 0, "set failed");
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["type"], "DurationSet");
    assert_eq!(event["duration_secs"], 1);

    let (stdout, _, code) = run_cli(
        home.path(),
        &["set", "--hours", "1", "--minutes", "30", "--seconds", "15"],
    );
    assert_eq!(code, 0, "set failed");
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["duration_secs"], 5415);

    let (stdout, _, code) = run_cli(home.path(), &["status"]);
    assert_eq!(code, 0);
    let snapshot: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(snapshot["custom_duration_secs"], 5415);
    assert_eq!(snapshot["formatted_time"], "01:30:15");
}

#[test]
fn reset_restores_custom_duration() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["set", "--seconds", "45"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(home.path(), &["reset"]);
    assert_eq!(code, 0, "reset failed");
    let event: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(event["type"], "TimerReset");
    assert_eq!(event["remaining_secs"], 45);
}

#[test]
fn stats_show_reports_empty_ledger() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["stats", "show"]);
    assert_eq!(code, 0, "stats show failed");

    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["label"], "today");
    assert_eq!(report["minutes"], 0.0);
    assert_eq!(report["progress_pct"], 0.0);
    assert_eq!(report["rolling_average"]["use_average"], false);
}

#[test]
fn stats_average_reports_empty_window() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["stats", "average"]);
    assert_eq!(code, 0, "stats average failed");

    let avg: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(avg["days_with_data"], 0);
    assert_eq!(avg["use_average"], false);
}

#[test]
fn config_list_get_set() {
    let home = tempfile::tempdir().unwrap();

    let (_, _, code) = run_cli(home.path(), &["config", "list"]);
    assert_eq!(code, 0, "config list failed");

    let (stdout, _, code) = run_cli(home.path(), &["config", "get", "timer.default_duration_secs"]);
    assert_eq!(code, 0, "config get failed");
    assert_eq!(stdout.trim(), "2400");

    let (_, _, code) = run_cli(
        home.path(),
        &["config", "set", "statistics.daily_goal_minutes", "300"],
    );
    assert_eq!(code, 0, "config set failed");

    let (stdout, _, code) = run_cli(
        home.path(),
        &["config", "get", "statistics.daily_goal_minutes"],
    );
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "300");

    let (_, _, code) = run_cli(home.path(), &["config", "get", "no.such.key"]);
    assert_ne!(code, 0, "unknown key should fail");
}

#[test]
fn theme_toggle_persists() {
    let home = tempfile::tempdir().unwrap();

    let (stdout, _, code) = run_cli(home.path(), &["theme", "show"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "dark");

    let (stdout, _, code) = run_cli(home.path(), &["theme", "toggle"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "light");

    let (stdout, _, code) = run_cli(home.path(), &["theme", "show"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "light");
}
