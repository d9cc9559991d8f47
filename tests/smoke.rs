use assert_cmd::Command;
use tempfile::tempdir;

fn encore() -> Command {
    Command::cargo_bin("encore").expect("binary exists")
}

#[test]
fn cli_help_runs() {
    encore().arg("--help").assert().success();
}

#[test]
fn unrecognized_command_reports_and_touches_nothing() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("log.txt");

    let assert = encore()
        .current_dir(dir.path())
        .env("LOG_FILE", &log_path)
        .arg("florp-this")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Unrecognized command"));
    assert!(!log_path.exists());
}

#[test]
fn concert_without_artist_is_a_usage_message() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("log.txt");

    let assert = encore()
        .current_dir(dir.path())
        .env("LOG_FILE", &log_path)
        .arg("CONCERT-THIS")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("Band information must be provided."));
    assert!(!log_path.exists());
}

#[test]
fn show_log_prints_existing_entries() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("log.txt");
    std::fs::write(&log_path, "an earlier entry\n").unwrap();

    let assert = encore()
        .current_dir(dir.path())
        .env("LOG_FILE", &log_path)
        .arg("show-log")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("an earlier entry"));
}
