//! Outbound provider adapters.

use reqwest::Client;

use crate::error::LookupError;

pub mod catalog;
pub mod concerts;
pub mod movies;

/// Shared client builder used by every adapter.
pub(crate) fn http_client() -> Result<Client, LookupError> {
    Ok(Client::builder()
        .user_agent(concat!("encore/", env!("CARGO_PKG_VERSION")))
        .gzip(true)
        .brotli(true)
        .build()?)
}
