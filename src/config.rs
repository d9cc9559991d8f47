//! Runtime configuration for encore.

use std::{env, path::PathBuf};

use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
///
/// Built once at process start and passed by reference into every adapter;
/// no credential or path state lives anywhere else.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// App id sent with concert-listing requests.
    pub bands_app_id: String,
    /// Client id for the music-catalog token exchange.
    pub spotify_client_id: String,
    /// Client secret for the music-catalog token exchange.
    pub spotify_client_secret: String,
    /// API key for the movie-lookup provider.
    pub omdb_api_key: String,
    /// Path of the append-only result log.
    pub log_path: PathBuf,
    /// Path of the fallback file read by `do-what-it-says`.
    pub instruction_path: PathBuf,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let bands_app_id =
            env::var("BANDS_APP_ID").unwrap_or_else(|_| "codingbootcamp".to_string());
        let spotify_client_id = env::var("SPOTIFY_CLIENT_ID").unwrap_or_default();
        let spotify_client_secret = env::var("SPOTIFY_CLIENT_SECRET").unwrap_or_default();
        let omdb_api_key = env::var("OMDB_API_KEY").unwrap_or_else(|_| "trilogy".to_string());
        let log_path = env::var("LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("log.txt"));
        let instruction_path = env::var("INSTRUCTION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("random.txt"));

        Ok(Self {
            bands_app_id,
            spotify_client_id,
            spotify_client_secret,
            omdb_api_key,
            log_path,
            instruction_path,
        })
    }
}
