//! File I/O utilities with atomic writes
//!
//! Store files are replaced whole via a staged sibling file and a rename,
//! so a crash mid-write leaves the previous contents intact.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FintrackError;

fn storage_err(action: &str, path: &Path, err: impl fmt::Display) -> FintrackError {
    FintrackError::Storage(format!("Cannot {} {}: {}", action, path.display(), err))
}

/// Read JSON from a file; a missing file reads as the default value
pub fn read_json<T, P>(path: P) -> Result<T, FintrackError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_err("read", path, e)),
    };

    serde_json::from_slice(&bytes).map_err(|e| storage_err("parse", path, e))
}

/// Write JSON to a file atomically
///
/// Serializes up front, stages the payload in a `.tmp` sibling, syncs it,
/// and renames it over the target. The target is either fully replaced or
/// untouched.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FintrackError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_err("create directory", parent, e))?;
    }

    let payload =
        serde_json::to_vec_pretty(data).map_err(|e| storage_err("serialize", path, e))?;

    // Staged next to the target so the rename stays on one filesystem
    let mut staged = path.as_os_str().to_owned();
    staged.push(".tmp");
    let staged = PathBuf::from(staged);

    let written = fs::File::create(&staged)
        .and_then(|mut file| {
            file.write_all(&payload)?;
            file.sync_all()
        })
        .and_then(|_| fs::rename(&staged, path));

    if let Err(e) = written {
        let _ = fs::remove_file(&staged);
        return Err(storage_err("write", path, e));
    }

    Ok(())
}

/// Check if a file exists and holds parseable JSON
pub fn json_file_valid<P: AsRef<Path>>(path: P) -> bool {
    fs::read(path)
        .map(|bytes| serde_json::from_slice::<serde_json::Value>(&bytes).is_ok())
        .unwrap_or(false)
}
