use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("fitme").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Terminal-based fitness tracking dashboard",
        ))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_command() {
    let mut cmd = Command::cargo_bin("fitme").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_completions_command() {
    let mut cmd = Command::cargo_bin("fitme").unwrap();
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("_fitme"));
}

#[test]
fn test_export_workout_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workouts.csv");

    let mut cmd = Command::cargo_bin("fitme").unwrap();
    cmd.arg("export").arg("workouts").arg("--output").arg(&path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Exported 9 rows"));

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some(r#""date","workout","duration","calories","weight""#)
    );
    assert_eq!(lines.count(), 9);
}

#[test]
fn test_export_weight_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.csv");

    let mut cmd = Command::cargo_bin("fitme").unwrap();
    cmd.arg("export").arg("weights").arg("-o").arg(&path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Exported 5 rows"));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with(r#""date","current","target""#));
    assert!(contents.contains(r#""2023-04-28","74.8","70.0""#));
}

#[test]
fn test_export_rejects_unknown_targets() {
    let mut cmd = Command::cargo_bin("fitme").unwrap();
    cmd.arg("export").arg("steps");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_config_init_creates_the_file() {
    let home = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("fitme").unwrap();
    cmd.env("HOME", home.path()).arg("config").arg("init");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Configuration initialized at:"));

    assert!(home.path().join(".fitme/config.toml").exists());

    // Refuses to overwrite without --force
    let mut cmd = Command::cargo_bin("fitme").unwrap();
    cmd.env("HOME", home.path()).arg("config").arg("init");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Use --force to overwrite"));
}
