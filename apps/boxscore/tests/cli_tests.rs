//! End-to-end tests for the boxscore binary.

use assert_cmd::Command;
use predicates::prelude::*;

const ROSTER: &str = "Babe Ruth 12 10 2 1 0 1 1 0\n\
                      Hank Aaron 12 10 2 1 0 1 1 0\n\
                      Ty Cobb 12 10 2 1 0 1 1 0\n";

fn write_roster(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("players.txt");
    std::fs::write(&path, ROSTER).expect("write roster");
    path
}

#[test]
fn run_writes_the_report_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let roster = write_roster(&dir);
    let out = dir.path().join("report.txt");

    Command::cargo_bin("boxscore")
        .expect("binary")
        .args(["run", "--roster"])
        .arg(&roster)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote:"));

    let report = std::fs::read_to_string(&out).expect("report exists");
    assert!(report.starts_with("BASEBALL TEAM REPORT --- 3 PLAYERS FOUND IN FILE"));
    assert!(report.contains("OVERALL BATTING AVERAGE is 0.400"));

    // ascending then descending
    let aaron = report.find("Aaron, Hank").expect("ascending row");
    let ruth = report.find("Ruth, Babe").expect("ascending row");
    assert!(aaron < ruth);
    assert!(report.rfind("Aaron, Hank").expect("descending row") > ruth);
}

#[test]
fn run_writes_the_json_export() {
    let dir = tempfile::tempdir().expect("tempdir");
    let roster = write_roster(&dir);
    let out = dir.path().join("report.txt");
    let json = dir.path().join("roster.json");

    Command::cargo_bin("boxscore")
        .expect("binary")
        .args(["run", "--roster"])
        .arg(&roster)
        .arg("--out")
        .arg(&out)
        .arg("--json")
        .arg(&json)
        .assert()
        .success()
        .stdout(predicate::str::contains("roster.json"));

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json).expect("json exists"))
            .expect("valid json");
    assert_eq!(value["player_count"], 3);
    assert_eq!(value["players"][0]["last_name"], "Aaron");
}

#[test]
fn config_file_supplies_default_paths() {
    let dir = tempfile::tempdir().expect("tempdir");
    let roster = write_roster(&dir);
    let out = dir.path().join("team.txt");
    let config = dir.path().join("boxscore.yaml");
    std::fs::write(&config, format!("out: {}\n", out.display())).expect("write config");

    Command::cargo_bin("boxscore")
        .expect("binary")
        .args(["run", "--roster"])
        .arg(&roster)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert!(out.exists());
}

#[test]
fn interactive_session_removes_and_prints() {
    let dir = tempfile::tempdir().expect("tempdir");
    let roster = write_roster(&dir);
    let out = dir.path().join("report.txt");

    Command::cargo_bin("boxscore")
        .expect("binary")
        .args(["run", "--roster"])
        .arg(&roster)
        .arg("--out")
        .arg(&out)
        .arg("--interactive")
        .write_stdin("print\nremove Babe Ruth\nremove Babe Ruth\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("|-Ruth, Babe"))
        .stdout(predicate::str::contains("Player was removed."))
        .stdout(predicate::str::contains("No player by that name was found."));
}

#[test]
fn interactive_session_rejects_unknown_commands() {
    let dir = tempfile::tempdir().expect("tempdir");
    let roster = write_roster(&dir);
    let out = dir.path().join("report.txt");

    Command::cargo_bin("boxscore")
        .expect("binary")
        .args(["run", "--roster"])
        .arg(&roster)
        .arg("--out")
        .arg(&out)
        .arg("--interactive")
        .write_stdin("jump\nquit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("not a valid command"));
}

#[test]
fn missing_roster_file_fails_with_context() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("report.txt");

    Command::cargo_bin("boxscore")
        .expect("binary")
        .args(["run", "--roster", "/nonexistent/players.txt"])
        .arg("--out")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("open roster file"));
}
