//! Crate-wide error type.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Terminal or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file exists but does not hold valid JSON of the expected shape.
    #[error("Save file {} is corrupt: {source}", .path.display())]
    CorruptFile {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Could not determine a data directory")]
    NoDataDir,

    #[error("Could not install signal handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
