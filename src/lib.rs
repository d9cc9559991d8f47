//! Command-line lookup assistant: concerts, songs, movies, and a result log.

pub mod cli;
pub mod config;
pub mod error;
pub mod instruction;
pub mod logbook;
pub mod logging;
pub mod providers;
pub mod report;
