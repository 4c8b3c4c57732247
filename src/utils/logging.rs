//! File-backed tracing setup.
//!
//! The terminal belongs to the game while it runs, so log records go to a
//! file in the data directory instead of stderr.

use crate::core::constants::LOG_ENV_VAR;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. The filter comes from `FLAPPY_LOG`
/// (e.g. `debug`), defaulting to `info`.
pub fn init_logging(log_path: &Path) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
