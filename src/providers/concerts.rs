//! Concert-listing adapter backed by the Bandsintown events endpoint.

use chrono::NaiveDateTime;
use serde::Deserialize;
use urlencoding::encode;

use crate::{config::Settings, error::LookupError};

use super::http_client;

const EVENTS_BASE: &str = "https://rest.bandsintown.com/artists";

/// One upcoming event with its venue resolved for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueEntry {
    pub name: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub event_date: String,
}

/// Fetch every listed event for `artist`.
pub async fn search_events(
    artist: &str,
    settings: &Settings,
) -> Result<Vec<ConcertEvent>, LookupError> {
    let client = http_client()?;
    let url = format!(
        "{base}/{artist}/events?app_id={app_id}",
        base = EVENTS_BASE,
        artist = encode(artist),
        app_id = settings.bands_app_id
    );
    let events: Vec<ConcertEvent> = client.get(url).send().await?.json().await?;
    Ok(events)
}

/// Venue entries ready for display, or `None` when the first event carries
/// no venue information (the provider's no-results shape).
pub fn venue_entries(events: &[ConcertEvent]) -> Option<Vec<VenueEntry>> {
    match events.first() {
        Some(first) if first.venue.is_some() => {}
        _ => return None,
    }

    let entries = events
        .iter()
        .filter_map(|event| {
            let venue = event.venue.as_ref()?;
            Some(VenueEntry {
                name: venue.name.clone(),
                city: venue.city.clone(),
                region: venue.region.clone(),
                country: venue.country.clone(),
                event_date: format_event_date(&event.datetime),
            })
        })
        .collect();
    Some(entries)
}

/// Render a provider timestamp as `MM/DD/YYYY`; unparsable input passes
/// through verbatim.
pub fn format_event_date(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|datetime| datetime.format("%m/%d/%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Raw event object as returned by the listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ConcertEvent {
    #[serde(default)]
    pub datetime: String,
    #[serde(default)]
    pub venue: Option<Venue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Venue {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
}
