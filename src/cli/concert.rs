//! `concert-this`: list upcoming events for an artist.

use tracing::info;

use crate::{
    config::Settings, error::LookupError, logbook::Logbook, providers::concerts, report,
};

/// Run a concert lookup.
///
/// The artist name is required; without it no network call is attempted.
/// Every event prints as its own block, and the whole result lands in the
/// log as one combined append after formatting finishes.
pub async fn run(parameter: Option<&str>, settings: &Settings) -> Result<(), LookupError> {
    let Some(artist) = parameter else {
        return Err(LookupError::Usage(
            "Band information must be provided.".to_string(),
        ));
    };

    let events = concerts::search_events(artist, settings).await?;
    let Some(entries) = concerts::venue_entries(&events) else {
        println!("No results found!");
        return Ok(());
    };
    info!(%artist, count = entries.len(), "concert results");

    let mut log_text = report::command_header("concert-this", artist);
    for entry in &entries {
        let block = report::venue_block(entry);
        println!("{block}");
        log_text.push_str(&block);
        log_text.push('\n');
    }

    Logbook::new(&settings.log_path).append(&log_text).await;
    Ok(())
}
