//! Error types for apkg2json.
//!
//! Every failure aborts the conversion; nothing is recovered internally.
//! Each variant carries the path it was working on so the message printed by
//! the binary points at the offending file.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for apkg2json operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a deck archive.
#[derive(Debug, Error)]
pub enum Error {
    /// The input is not a readable zip archive.
    #[error("'{path}' is not a valid deck archive: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// The archive holds no collection database.
    #[error("no collection database (collection.anki21 or collection.anki2) in '{path}'")]
    MissingDatabase { path: PathBuf },

    /// The collection database is corrupt or lacks the `notes` table.
    #[error("failed to read notes from '{path}': {source}")]
    Database {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// The media manifest exists but is not a JSON object of strings.
    #[error("malformed media manifest '{path}': {source}")]
    Media {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading media, extracting the archive or writing the output failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
