//! First-run database provisioning.
//!
//! Ships a read-only seed database alongside the application and copies
//! it into per-user writable storage exactly once. Every later launch
//! finds the file in place and does nothing.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Seed database not found: {0}")]
    SeedMissing(PathBuf),
    #[error("Could not determine application data directory")]
    NoDataDir,
}

/// Fixed name of the writable database file.
pub const DB_FILE_NAME: &str = "games.db";

/// Default database location: `{data_dir}/game-shelf/games.db`.
pub fn default_db_path() -> Result<PathBuf, ProvisionError> {
    let base = dirs::data_dir().ok_or(ProvisionError::NoDataDir)?;
    Ok(base.join("game-shelf").join(DB_FILE_NAME))
}

/// Ensure a writable database file can exist at `target`.
///
/// If `target` is already present this is a no-op returning `false`.
/// Otherwise the parent directory is created and, when a seed is given,
/// the seed's bytes are copied verbatim; returns `true` for a first
/// run. With no seed the target is left absent for the schema step to
/// create from scratch.
///
/// Errors here are fatal to startup: an unreadable seed or unwritable
/// target directory means the application must not proceed.
pub fn provision_database(seed: Option<&Path>, target: &Path) -> Result<bool, ProvisionError> {
    if target.exists() {
        return Ok(false);
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    if let Some(seed) = seed {
        if !seed.exists() {
            return Err(ProvisionError::SeedMissing(seed.to_path_buf()));
        }
        fs::copy(seed, target)?;
    }

    Ok(true)
}
