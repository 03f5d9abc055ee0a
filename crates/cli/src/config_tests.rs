// SPDX-License-Identifier: MIT

use super::*;
use serial_test::serial;
use std::time::Duration;

fn clear_env() {
    for var in ["RUNNER_DATA_DIR", "RUNNER_REQUEST_TIMEOUT_SECS", "RUNNER_LOG_FILTER"] {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn defaults_when_unset() {
    clear_env();
    let config = RunnerConfig::from_env();
    assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    assert_eq!(config.request_timeout, hc_executor::DEFAULT_TIMEOUT);
    assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    clear_env();
}

#[test]
#[serial]
fn reads_overrides_from_environment() {
    clear_env();
    std::env::set_var("RUNNER_DATA_DIR", "/tmp/hookchain-data");
    std::env::set_var("RUNNER_REQUEST_TIMEOUT_SECS", "15");
    std::env::set_var("RUNNER_LOG_FILTER", "debug");

    let config = RunnerConfig::from_env();
    assert_eq!(config.data_dir, PathBuf::from("/tmp/hookchain-data"));
    assert_eq!(config.request_timeout, Duration::from_secs(15));
    assert_eq!(config.log_filter, "debug");

    clear_env();
}

#[test]
#[serial]
fn unparsable_timeout_falls_back_to_default() {
    clear_env();
    std::env::set_var("RUNNER_REQUEST_TIMEOUT_SECS", "not-a-number");
    let config = RunnerConfig::from_env();
    assert_eq!(config.request_timeout, hc_executor::DEFAULT_TIMEOUT);
    clear_env();
}
