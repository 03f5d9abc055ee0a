// SPDX-License-Identifier: MIT

//! Execution log entries: the audit trail of task runs.

use crate::ids::{LogId, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What kind of event a log entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogEvent {
    Start,
    Step,
    Complete,
}

crate::simple_display! {
    LogEvent {
        Start => "start",
        Step => "step",
        Complete => "complete",
    }
}

/// Outcome recorded alongside an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogStatus {
    Running,
    Success,
    Failure,
}

crate::simple_display! {
    LogStatus {
        Running => "running",
        Success => "success",
        Failure => "failure",
    }
}

/// One append-only record of task run activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: LogId,
    pub timestamp: String,
    pub task_id: TaskId,
    pub task_name: String,
    pub event: LogEvent,
    pub status: LogStatus,
    pub message: String,
    #[serde(default)]
    pub details: Value,
}

/// Payload for appending a log entry; the store assigns `id` and `timestamp`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLogEntry {
    pub task_id: TaskId,
    pub task_name: String,
    pub event: LogEvent,
    pub status: LogStatus,
    pub message: String,
    pub details: Value,
}

#[cfg(test)]
#[path = "log_entry_tests.rs"]
mod tests;
