// SPDX-License-Identifier: MIT

//! Carries a process exit code alongside an error message, so `main` can
//! translate an [`AdminError`](crate::facade::AdminError) into a process
//! outcome without calling `std::process::exit` from deep inside a command.

use crate::facade::AdminError;
use std::fmt;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

impl From<AdminError> for ExitError {
    fn from(error: AdminError) -> Self {
        let code = match &error {
            AdminError::Validation(_) => 400,
            AdminError::NotFound(_) => 404,
            AdminError::Internal(_) => 500,
        };
        Self::new(code, error.to_string())
    }
}
