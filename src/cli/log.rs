//! `show-log`: print the result log verbatim.

use crate::{config::Settings, error::LookupError, logbook::Logbook};

pub async fn run(settings: &Settings) -> Result<(), LookupError> {
    if let Some(contents) = Logbook::new(&settings.log_path).read_all().await {
        println!("{contents}");
    }
    Ok(())
}
