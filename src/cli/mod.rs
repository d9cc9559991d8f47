//! Command-line surface and dispatch for encore.

use clap::Parser;
use tracing::{error, warn};

use crate::{config::Settings, error::LookupError};

pub mod concert;
pub mod log;
pub mod movie;
pub mod replay;
pub mod song;

/// Top-level CLI definition: one free-text command plus an optional parameter.
///
/// The command is a plain string rather than a clap subcommand because the
/// `do-what-it-says` replay re-dispatches whatever text the fallback file
/// names, through the same entry point.
#[derive(Debug, Parser)]
#[command(author, version, about = "Concert, song, and movie lookup assistant", long_about = None)]
pub struct Cli {
    /// Command to run: concert-this, spotify-this-song, movie-this,
    /// do-what-it-says, or show-log.
    pub command: String,
    /// Free-text parameter for the command (quote multi-word values).
    pub parameter: Option<String>,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Supported commands, matched after case normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ConcertThis,
    SpotifyThisSong,
    MovieThis,
    DoWhatItSays,
    ShowLog,
}

impl Command {
    /// Resolve a command name; matching is case-insensitive.
    pub fn resolve(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "concert-this" => Some(Self::ConcertThis),
            "spotify-this-song" => Some(Self::SpotifyThisSong),
            "movie-this" => Some(Self::MovieThis),
            "do-what-it-says" => Some(Self::DoWhatItSays),
            "show-log" => Some(Self::ShowLog),
            _ => None,
        }
    }
}

/// Route one (command, parameter) pair to its run function.
///
/// Entered from `main` and re-entered by the `do-what-it-says` replay. All
/// network and file side effects live in the run functions; this function
/// only reports. An unrecognized command produces a notice and nothing else,
/// and a failed operation is reported without aborting the process.
pub async fn dispatch(command: &str, parameter: Option<&str>, settings: &Settings) {
    let Some(resolved) = Command::resolve(command) else {
        warn!(%command, "unrecognized command");
        println!("Unrecognized command: {command}");
        return;
    };

    let outcome = match resolved {
        Command::ConcertThis => concert::run(parameter, settings).await,
        Command::SpotifyThisSong => song::run(parameter, settings).await,
        Command::MovieThis => movie::run(parameter, settings).await,
        Command::DoWhatItSays => replay::run(settings).await,
        Command::ShowLog => log::run(settings).await,
    };

    if let Err(err) = outcome {
        match err {
            LookupError::Usage(message) => println!("{message}"),
            other => {
                error!(error = %other, %command, "command failed");
                println!("Error: {other}");
            }
        }
    }
}
