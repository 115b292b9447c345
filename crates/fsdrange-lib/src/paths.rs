//! Default input locations.
//!
//! Resolution order for both inputs:
//! 1. Explicit path argument.
//! 2. Environment variable (`FSDRANGE_JOURNAL` / `FSDRANGE_REFERENCE`).
//! 3. Platform default location.

use std::env;
use std::path::{Path, PathBuf};

use directories::{BaseDirs, ProjectDirs};

use crate::error::{Error, Result};

pub const JOURNAL_ENV: &str = "FSDRANGE_JOURNAL";
pub const REFERENCE_ENV: &str = "FSDRANGE_REFERENCE";

/// Default filename for the reference dataset.
const REFERENCE_FILENAME: &str = "spansh.data.json";

#[cfg(windows)]
const JOURNAL_SUBDIR: &[&str] = &["Saved Games", "Frontier Developments", "Elite Dangerous"];

// Proton prefix used by the Steam release.
#[cfg(not(windows))]
const JOURNAL_SUBDIR: &[&str] = &[
    ".local",
    "share",
    "Steam",
    "steamapps",
    "compatdata",
    "359320",
    "pfx",
    "drive_c",
    "users",
    "steamuser",
    "Saved Games",
    "Frontier Developments",
    "Elite Dangerous",
];

/// The directory the game writes journals to, if a home directory is known.
pub fn default_journal_dir() -> Option<PathBuf> {
    let base = BaseDirs::new()?;
    let mut dir = base.home_dir().to_path_buf();
    dir.extend(JOURNAL_SUBDIR);
    Some(dir)
}

/// Resolve the default reference data location using platform-specific project directories.
pub fn default_reference_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "fsdrange", "fsdrange").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(REFERENCE_FILENAME))
}

/// Journal file or directory to read.
pub fn resolve_journal_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env::var_os(JOURNAL_ENV) {
        return Some(PathBuf::from(path));
    }
    default_journal_dir()
}

/// Reference dataset file to read.
pub fn resolve_reference_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = env::var_os(REFERENCE_ENV) {
        return Ok(PathBuf::from(path));
    }
    default_reference_path()
}
