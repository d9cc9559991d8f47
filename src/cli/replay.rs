//! `do-what-it-says`: replay the instruction stored in the fallback file.

use tracing::info;

use crate::{config::Settings, error::LookupError, instruction};

/// Read the fallback file and re-dispatch whatever it names, preserving the
/// full behavior of the named command.
pub async fn run(settings: &Settings) -> Result<(), LookupError> {
    let text = tokio::fs::read_to_string(&settings.instruction_path).await?;
    let Some(parsed) = instruction::parse(&text) else {
        return Err(LookupError::MalformedInstruction(text.trim().to_string()));
    };

    info!(command = %parsed.command, parameter = %parsed.parameter, "replaying instruction");
    println!("Running: {}, {}", parsed.command, parsed.parameter);

    // Boxed so the dispatch -> replay -> dispatch cycle has a sized future.
    Box::pin(super::dispatch(
        &parsed.command,
        Some(&parsed.parameter),
        settings,
    ))
    .await;
    Ok(())
}
