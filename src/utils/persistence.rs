//! JSON persistence helpers for files in the game's data directory.

use crate::core::constants::HOME_ENV_VAR;
use crate::error::{GameError, Result};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the data directory, creating it if needed.
///
/// `FLAPPY_HOME` overrides the platform default.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match env::var_os(HOME_ENV_VAR) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => ProjectDirs::from("", "", "ascii-flappy")
            .ok_or(GameError::NoDataDir)?
            .data_dir()
            .to_path_buf(),
    };
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Load a JSON file, returning `T::default()` if it does not exist.
///
/// Unlike a missing file, an unreadable or malformed file is an error.
pub fn load_json<T: Default + serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&json).map_err(|source| GameError::CorruptFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Save a value as pretty-printed JSON, creating parent directories.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}
