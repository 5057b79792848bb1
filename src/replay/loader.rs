use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::models::ReplayData;

/// Failures loading a parsed demo export. The first three preconditions are
/// checked up front and reported individually before any output is written.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("[X] {} not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("[X] failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[X] failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("[X] kills not found in demo")]
    NoKills,

    #[error("[X] ticks not found in demo")]
    NoTicks,
}

/// Parse a demo export from its JSON text and validate that it carries kill
/// and tick data. Malformed field contents beyond that propagate as-is.
pub fn parse(json: &str, path: &Path) -> Result<ReplayData, ReplayError> {
    let data: ReplayData = serde_json::from_str(json).map_err(|source| ReplayError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if data.kills.is_empty() {
        return Err(ReplayError::NoKills);
    }
    if data.ticks.is_empty() {
        return Err(ReplayError::NoTicks);
    }
    Ok(data)
}

/// Load a parsed demo export from disk.
pub fn load(path: &Path) -> Result<ReplayData, ReplayError> {
    if !path.exists() {
        return Err(ReplayError::FileNotFound(path.to_path_buf()));
    }
    let json = fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&json, path)
}
