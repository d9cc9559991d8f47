//! Movie-lookup adapter backed by the OMDb API.

use serde::Deserialize;
use urlencoding::encode;

use crate::{config::Settings, error::LookupError};

use super::http_client;

const OMDB_BASE: &str = "http://www.omdbapi.com/";

/// Fallback movie title when the caller provides none.
pub const DEFAULT_MOVIE: &str = "Mr. Nobody";

/// Rating source names scanned for in the provider's ratings array.
pub const IMDB_SOURCE: &str = "Internet Movie Database";
pub const ROTTEN_TOMATOES_SOURCE: &str = "Rotten Tomatoes";

/// Single looked-up movie flattened for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    pub title: String,
    pub released: String,
    pub imdb_rating: Option<String>,
    pub rotten_tomatoes_rating: Option<String>,
    pub country: String,
    pub language: String,
    pub plot: String,
    pub actors: String,
}

/// Resolve the movie title to look up.
pub fn resolve_title(parameter: Option<&str>) -> &str {
    parameter.unwrap_or(DEFAULT_MOVIE)
}

/// Look up `title`; `None` when the provider has no matching movie.
pub async fn lookup_movie(
    title: &str,
    settings: &Settings,
) -> Result<Option<MovieRecord>, LookupError> {
    let client = http_client()?;
    let url = format!(
        "{base}?t={title}&apikey={key}",
        base = OMDB_BASE,
        title = encode(title),
        key = settings.omdb_api_key
    );
    let response: MovieResponse = client.get(url).send().await?.json().await?;
    Ok(response.into_record())
}

/// Find the value for an exact-match rating source, wherever it sits in the
/// array.
pub fn find_rating(ratings: &[Rating], source: &str) -> Option<String> {
    ratings
        .iter()
        .find(|rating| rating.source == source)
        .map(|rating| rating.value.clone())
}

#[derive(Debug, Clone, Deserialize)]
pub struct Rating {
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// Raw lookup response. A missing `Title` is the provider's no-results shape
/// (its error payloads carry `Response: "False"` and no title).
#[derive(Debug, Deserialize)]
struct MovieResponse {
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Released", default)]
    released: String,
    #[serde(rename = "Ratings", default)]
    ratings: Vec<Rating>,
    #[serde(rename = "Country", default)]
    country: String,
    #[serde(rename = "Language", default)]
    language: String,
    #[serde(rename = "Plot", default)]
    plot: String,
    #[serde(rename = "Actors", default)]
    actors: String,
}

impl MovieResponse {
    fn into_record(self) -> Option<MovieRecord> {
        let title = self.title?;
        let imdb_rating = find_rating(&self.ratings, IMDB_SOURCE);
        let rotten_tomatoes_rating = find_rating(&self.ratings, ROTTEN_TOMATOES_SOURCE);
        Some(MovieRecord {
            title,
            released: self.released,
            imdb_rating,
            rotten_tomatoes_rating,
            country: self.country,
            language: self.language,
            plot: self.plot,
            actors: self.actors,
        })
    }
}
