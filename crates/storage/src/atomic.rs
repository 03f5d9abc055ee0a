// SPDX-License-Identifier: MIT

//! Crash-safer whole-file JSON persistence: write to a sibling `.tmp` path,
//! then rename over the target. A rename is atomic on the same filesystem,
//! so a reader never observes a half-written file.

use crate::error::StoreError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Load and parse a pretty-printed JSON array from `path`.
///
/// A missing file yields the caller-supplied `default`; any other I/O error,
/// or malformed JSON, is propagated.
pub(crate) fn load_json<T: DeserializeOwned>(
    path: &Path,
    default: impl FnOnce() -> T,
) -> Result<T, StoreError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "store file missing, using default");
            return Ok(default());
        }
        Err(source) => return Err(StoreError::Io { path: path.to_path_buf(), source }),
    };

    serde_json::from_str(&contents)
        .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })
}

/// Serialize `value` as pretty-printed JSON and persist it atomically.
pub(crate) fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })?;

    let tmp_path = path.with_extension("json.tmp");
    let result = (|| -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&tmp_path, json.as_bytes())?;
        std::fs::rename(&tmp_path, path)
    })();

    result.map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "failed to persist store file");
        StoreError::Io { path: path.to_path_buf(), source }
    })?;

    tracing::debug!(path = %path.display(), "persisted store file");
    Ok(())
}
