// SPDX-License-Identifier: MIT

//! Process-level configuration, read from environment variables with
//! defaults — the way the teacher's `daemon/src/env.rs` centralizes its own
//! environment lookups rather than scattering `std::env::var` calls.

use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration for the scheduler process.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub data_dir: PathBuf,
    pub request_timeout: Duration,
    pub log_filter: String,
}

impl RunnerConfig {
    /// Read configuration from the environment, falling back to defaults
    /// for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("RUNNER_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
            request_timeout: std::env::var("RUNNER_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(hc_executor::DEFAULT_TIMEOUT),
            log_filter: std::env::var("RUNNER_LOG_FILTER").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Install a `tracing` subscriber honoring [`Self::log_filter`].
    pub fn init_tracing(&self) {
        let filter = tracing_subscriber::EnvFilter::try_new(&self.log_filter)
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
