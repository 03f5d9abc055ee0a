// SPDX-License-Identifier: MIT

//! Store error taxonomy.

use thiserror::Error;

/// Errors surfaced by [`crate::Store`] operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error reading/writing {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("corrupt JSON in {path}: {source}")]
    Json {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("task {0} not found")]
    NotFound(hc_core::TaskId),
}
