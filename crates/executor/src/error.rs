// SPDX-License-Identifier: MIT

//! Step execution error taxonomy.
//!
//! The `Display` impl of each variant is the exact diagnostic string that
//! ends up in [`crate::StepResult::error`], so callers can either match on
//! structure or just read the message.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StepExecutorError {
    #[error("request timeout")]
    Timeout,
    #[error("connection error")]
    Connection,
    #[error("HTTP error: {status} {body}")]
    Http { status: u16, body: String },
    #[error("response is not valid JSON")]
    InvalidJson,
    #[error("unknown: {0}")]
    Unknown(String),
}

impl From<reqwest::Error> for StepExecutorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection
        } else {
            Self::Unknown(err.to_string())
        }
    }
}
