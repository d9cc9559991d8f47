//! Append-only result log with verbatim read-back.

use std::path::PathBuf;

use tokio::{fs, fs::OpenOptions, io::AsyncWriteExt};
use tracing::error;

/// Handle on the append-only log file.
///
/// No locking: concurrent writers, including other invocations of the
/// binary, may interleave their blocks.
#[derive(Debug, Clone)]
pub struct Logbook {
    path: PathBuf,
}

impl Logbook {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append `text`, creating the file on first use.
    ///
    /// A write failure is reported and swallowed; the operation that
    /// produced `text` carries on without it.
    pub async fn append(&self, text: &str) {
        if let Err(err) = self.try_append(text).await {
            error!(path = %self.path.display(), %err, "log append failed");
            println!("Error: {err}");
        }
    }

    async fn try_append(&self, text: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(text.as_bytes()).await
    }

    /// Read the whole log; a read failure is reported and yields `None`.
    pub async fn read_all(&self) -> Option<String> {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => Some(contents),
            Err(err) => {
                error!(path = %self.path.display(), %err, "log read failed");
                println!("Error: {err}");
                None
            }
        }
    }
}
