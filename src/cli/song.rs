//! `spotify-this-song`: search the music catalog for a track.

use futures::stream::{self, StreamExt};
use tracing::info;

use crate::{
    config::Settings, error::LookupError, logbook::Logbook, providers::catalog, report,
};

const APPEND_CONCURRENCY: usize = 4;

/// Run a track search.
///
/// The command header is appended before the search runs, so a failed search
/// still leaves the header in the log. Each track is then appended as its
/// own write; the appends run concurrently and their order in the log is not
/// guaranteed to match console order.
pub async fn run(parameter: Option<&str>, settings: &Settings) -> Result<(), LookupError> {
    let song = catalog::resolve_song(parameter);
    let logbook = Logbook::new(&settings.log_path);

    logbook
        .append(&report::command_header("spotify-this-song", song))
        .await;

    let entries = catalog::search_tracks(song, settings).await?;
    info!(%song, count = entries.len(), "catalog results");

    let blocks: Vec<String> = entries
        .iter()
        .map(|entry| {
            let block = report::track_block(entry);
            println!("{block}");
            format!("{block}\n")
        })
        .collect();

    stream::iter(blocks)
        .map(|block| {
            let logbook = &logbook;
            async move { logbook.append(&block).await }
        })
        .buffer_unordered(APPEND_CONCURRENCY)
        .collect::<Vec<_>>()
        .await;

    Ok(())
}
