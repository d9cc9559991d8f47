//! Result Formatter: display and log blocks for each adapter outcome.
//!
//! The console sees each block via `println!`; the log gets the same block
//! with a trailing blank line so entries stay visually separated.

use crate::providers::{catalog::TrackEntry, concerts::VenueEntry, movies::MovieRecord};

/// Literal shown when an optional field has no value.
const NONE_PLACEHOLDER: &str = "None";

/// Header line identifying a command and its parameter in the log.
pub fn command_header(command: &str, parameter: &str) -> String {
    format!("********************* {command}: {parameter} *********************\n")
}

/// Block for one concert venue.
pub fn venue_block(entry: &VenueEntry) -> String {
    format!(
        "---------- Venue Information ----------\n\
         Venue Name: {name}\n\
         Venue Location: {city} {region}, {country}\n\
         Event Date: {date}\n",
        name = entry.name,
        city = entry.city,
        region = entry.region,
        country = entry.country,
        date = entry.event_date
    )
}

/// Block for one catalog track.
pub fn track_block(entry: &TrackEntry) -> String {
    let preview = entry.preview_url.as_deref().unwrap_or(NONE_PLACEHOLDER);
    format!(
        "---------- Song Information ----------\n\
         Artist: {artist}\n\
         Song Name: {song}\n\
         Preview Link: {preview}\n\
         Album: {album}\n",
        artist = entry.artist,
        song = entry.song_name,
        album = entry.album
    )
}

/// Combined block for one looked-up movie.
pub fn movie_block(record: &MovieRecord) -> String {
    let imdb = record.imdb_rating.as_deref().unwrap_or(NONE_PLACEHOLDER);
    let rotten = record
        .rotten_tomatoes_rating
        .as_deref()
        .unwrap_or(NONE_PLACEHOLDER);
    format!(
        "---------- Movie Information ----------\n\
         Movie Title: {title}\n\
         Release: {released}\n\
         IMDB Rating: {imdb}\n\
         Rotten Tomatoes Rating: {rotten}\n\
         Produced in Countries: {country}\n\
         Movie Language: {language}\n\
         Plot: {plot}\n\
         Actors: {actors}\n",
        title = record.title,
        released = record.released,
        country = record.country,
        language = record.language,
        plot = record.plot,
        actors = record.actors
    )
}
