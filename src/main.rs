//! Entry point wiring CLI dispatch to the lookup modules.

use anyhow::Result;
use encore::{cli, config::Settings, logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing()?;
    let settings = Settings::load()?;
    let args = cli::Cli::parse();

    info!(?args, "starting command");
    cli::dispatch(&args.command, args.parameter.as_deref(), &settings).await;
    Ok(())
}
