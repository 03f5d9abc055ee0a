// SPDX-License-Identifier: MIT

//! Error types for schedule parsing and job-table operations.

use thiserror::Error;

/// Failures raised while turning a task's schedule fields into a [`crate::trigger::Trigger`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("cron expression parse error: {0}")]
    InvalidCron(String),
    #[error("interval configuration error: interval_seconds must be positive")]
    InvalidInterval,
    #[error("task is missing its cron_expression field")]
    MissingCronExpression,
    #[error("task is missing its interval_seconds field")]
    MissingIntervalSeconds,
}

/// Errors surfaced by [`crate::Scheduler`] operations. Missing-id cases are
/// reported as `Ok(false)` per the operations' own return types (mirroring
/// `Store`); this enum exists for failures the store layer itself raises.
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("store error: {0}")]
    Store(#[from] hc_storage::StoreError),
}
