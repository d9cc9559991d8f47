//! Failure categories for a single dispatched operation.

use thiserror::Error;

/// Errors terminal for one command but never for the process.
///
/// Empty provider results are not errors; adapters model them as Ok-empty
/// outcomes so the log stays untouched.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Required user input was missing; reported verbatim, no side effects.
    #[error("{0}")]
    Usage(String),
    /// Outbound request or client setup failed. No retry.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Log or instruction file access failed.
    #[error("file access failed: {0}")]
    Io(#[from] std::io::Error),
    /// The fallback file did not hold a `command, parameter` line.
    #[error("malformed instruction: {0:?}")]
    MalformedInstruction(String),
}
