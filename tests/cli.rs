use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the caller's config, .env files and credentials.
fn ghstreak(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ghstreak").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("GITHUB_USERNAME")
        .env_remove("GITHUB_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

fn write_days(home: &TempDir) -> std::path::PathBuf {
    let path = home.path().join("days.json");
    std::fs::write(
        &path,
        r#"[
            {"date": "2024-05-05", "contributionCount": 1},
            {"date": "2024-05-06", "contributionCount": 0},
            {"date": "2024-05-07", "contributionCount": 3},
            {"date": "2024-05-08", "contributionCount": 6},
            {"date": "2024-05-09", "contributionCount": 12},
            {"date": "2024-05-10", "contributionCount": 0}
        ]"#,
    )
    .unwrap();
    path
}

#[test]
fn summary_json_from_input_file() {
    let home = TempDir::new().unwrap();
    let days = write_days(&home);

    let output = ghstreak(&home)
        .args(["summary", "-o", "json", "--today", "2024-05-10", "--input"])
        .arg(&days)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_contributions"], 22);
    assert_eq!(value["current_streak"]["length"], 3);
    assert_eq!(value["current_streak"]["range"]["start"], "2024-05-07");
    assert_eq!(value["current_streak"]["range"]["end"], "2024-05-09");
    assert_eq!(value["longest_streak"]["length"], 3);
}

#[test]
fn today_override_keeps_date_under_local_boundary() {
    let home = TempDir::new().unwrap();
    let days = write_days(&home);

    let output = ghstreak(&home)
        .args(["summary", "-o", "json", "--today", "2024-05-10"])
        .args(["--day-boundary", "local", "--input"])
        .arg(&days)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["today"], "2024-05-10");
    assert_eq!(value["current_streak"]["length"], 3);
}

#[test]
fn heatmap_pretty_from_input_file() {
    let home = TempDir::new().unwrap();
    let days = write_days(&home);

    ghstreak(&home)
        .args(["heatmap", "--today", "2024-05-10", "--input"])
        .arg(&days)
        .assert()
        .success()
        .stdout(predicate::str::contains("22 contributions in the last year"))
        .stdout(predicate::str::contains("Less"));
}

#[test]
fn malformed_today_fails() {
    let home = TempDir::new().unwrap();
    let days = write_days(&home);

    ghstreak(&home)
        .args(["summary", "--today", "10/05/2024", "--input"])
        .arg(&days)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed input"));
}

#[test]
fn missing_credentials_fails() {
    let home = TempDir::new().unwrap();

    ghstreak(&home)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITHUB_USERNAME"));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();

    ghstreak(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ghstreak"));
}
