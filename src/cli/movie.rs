//! `movie-this`: look up one movie and print its summary block.

use tracing::info;

use crate::{
    config::Settings, error::LookupError, logbook::Logbook, providers::movies, report,
};

/// Run a movie lookup. A response without a title is a no-results outcome
/// and leaves the log untouched; otherwise one combined block is printed and
/// appended in a single write.
pub async fn run(parameter: Option<&str>, settings: &Settings) -> Result<(), LookupError> {
    let title = movies::resolve_title(parameter);

    let Some(record) = movies::lookup_movie(title, settings).await? else {
        println!("No results found!");
        return Ok(());
    };
    info!(%title, "movie result");

    let block = report::movie_block(&record);
    println!("{block}");

    let mut log_text = report::command_header("movie-this", title);
    log_text.push_str(&block);
    log_text.push('\n');
    Logbook::new(&settings.log_path).append(&log_text).await;
    Ok(())
}
