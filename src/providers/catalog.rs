//! Music-catalog adapter: client-credentials auth plus track search.

use reqwest::Client;
use serde::Deserialize;
use urlencoding::encode;

use crate::{config::Settings, error::LookupError};

use super::http_client;

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const SEARCH_URL: &str = "https://api.spotify.com/v1/search";

/// Cap on catalog hits per search.
const TRACK_LIMIT: usize = 20;

/// Fallback song title when the caller provides none.
pub const DEFAULT_SONG: &str = "The Sign";

/// One catalog hit flattened for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEntry {
    pub artist: String,
    pub song_name: String,
    pub preview_url: Option<String>,
    pub album: String,
}

/// Resolve the song title to search.
pub fn resolve_song(parameter: Option<&str>) -> &str {
    parameter.unwrap_or(DEFAULT_SONG)
}

/// Search the catalog for `song`, returning at most twenty entries.
pub async fn search_tracks(
    song: &str,
    settings: &Settings,
) -> Result<Vec<TrackEntry>, LookupError> {
    let client = http_client()?;
    let token = access_token(&client, settings).await?;
    let url = format!(
        "{base}?type=track&limit={limit}&q={query}",
        base = SEARCH_URL,
        limit = TRACK_LIMIT,
        query = encode(song)
    );
    let response: SearchResponse = client
        .get(url)
        .bearer_auth(token)
        .send()
        .await?
        .json()
        .await?;

    Ok(response
        .tracks
        .items
        .into_iter()
        .map(Track::into_entry)
        .collect())
}

/// One client-credentials token per invocation; the process runs a single
/// search, so no caching or refresh.
async fn access_token(client: &Client, settings: &Settings) -> Result<String, LookupError> {
    let response: TokenResponse = client
        .post(TOKEN_URL)
        .basic_auth(
            &settings.spotify_client_id,
            Some(&settings.spotify_client_secret),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?
        .json()
        .await?;
    Ok(response.access_token)
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    tracks: TrackPage,
}

#[derive(Debug, Default, Deserialize)]
struct TrackPage {
    #[serde(default)]
    items: Vec<Track>,
}

#[derive(Debug, Deserialize)]
struct Track {
    name: String,
    #[serde(default)]
    preview_url: Option<String>,
    #[serde(default)]
    artists: Vec<Artist>,
    album: Album,
}

impl Track {
    fn into_entry(self) -> TrackEntry {
        let artist = self
            .artists
            .into_iter()
            .next()
            .map(|artist| artist.name)
            .unwrap_or_default();
        TrackEntry {
            artist,
            song_name: self.name,
            preview_url: self.preview_url,
            album: self.album.name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Artist {
    name: String,
}

#[derive(Debug, Deserialize)]
struct Album {
    name: String,
}
