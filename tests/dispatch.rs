use std::path::Path;

use encore::cli::{self, Command};
use encore::config::Settings;
use tempfile::tempdir;

fn settings(dir: &Path) -> Settings {
    Settings {
        bands_app_id: "test".to_string(),
        spotify_client_id: String::new(),
        spotify_client_secret: String::new(),
        omdb_api_key: "test".to_string(),
        log_path: dir.join("log.txt"),
        instruction_path: dir.join("random.txt"),
    }
}

#[test]
fn command_names_match_case_insensitively() {
    assert_eq!(Command::resolve("SHOW-LOG"), Some(Command::ShowLog));
    assert_eq!(Command::resolve("Concert-This"), Some(Command::ConcertThis));
    assert_eq!(Command::resolve("dance-this"), None);
}

#[tokio::test]
async fn unknown_command_leaves_the_log_untouched() {
    let dir = tempdir().unwrap();
    let settings = settings(dir.path());

    cli::dispatch("Florp-This", Some("anything"), &settings).await;

    assert!(!settings.log_path.exists());
}

#[tokio::test]
async fn concert_without_artist_leaves_the_log_untouched() {
    let dir = tempdir().unwrap();
    let settings = settings(dir.path());

    cli::dispatch("concert-this", None, &settings).await;

    assert!(!settings.log_path.exists());
}

#[tokio::test]
async fn replay_of_an_unknown_command_has_no_side_effects() {
    let dir = tempdir().unwrap();
    let settings = settings(dir.path());
    tokio::fs::write(&settings.instruction_path, "florp-this, something\n")
        .await
        .unwrap();

    cli::dispatch("do-what-it-says", None, &settings).await;

    assert!(!settings.log_path.exists());
}

#[tokio::test]
async fn replay_with_a_missing_instruction_file_is_reported_not_fatal() {
    let dir = tempdir().unwrap();
    let settings = settings(dir.path());

    cli::dispatch("do-what-it-says", None, &settings).await;

    assert!(!settings.log_path.exists());
}
