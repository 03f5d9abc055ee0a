// SPDX-License-Identifier: MIT

//! Canonical event stream: a thin façade over [`Store::add_log`] that fills
//! in the structured fields for task start/finish and per-step traces.
//!
//! Log-write failures never propagate to the caller — they are recorded via
//! `tracing` instead, matching the rest of this workspace's "logging must
//! not break the engine" discipline.

use crate::chain::StepOutcome;
use hc_core::clock::Clock;
use hc_core::log_entry::{LogEvent, LogStatus, NewLogEntry};
use hc_core::task::Task;
use hc_storage::Store;
use serde_json::{json, Value};

/// Wraps a [`Store`] to record structured task/step events.
pub struct Logger<C: Clock> {
    pub(crate) store: std::sync::Arc<Store<C>>,
}

impl<C: Clock> Logger<C> {
    pub fn new(store: std::sync::Arc<Store<C>>) -> Self {
        Self { store }
    }

    pub fn log_task_start(&self, task: &Task) {
        self.append(NewLogEntry {
            task_id: task.id,
            task_name: task.name.clone(),
            event: LogEvent::Start,
            status: LogStatus::Running,
            message: format!("task \"{}\" started", task.name),
            details: Value::Object(Default::default()),
        });
    }

    pub fn log_task_success(&self, task: &Task, details: Value) {
        self.append(NewLogEntry {
            task_id: task.id,
            task_name: task.name.clone(),
            event: LogEvent::Complete,
            status: LogStatus::Success,
            message: format!("task \"{}\" completed successfully", task.name),
            details,
        });
    }

    pub fn log_task_failure(&self, task: &Task, error: &str, details: Value) {
        self.append(NewLogEntry {
            task_id: task.id,
            task_name: task.name.clone(),
            event: LogEvent::Complete,
            status: LogStatus::Failure,
            message: format!("task \"{}\" failed: {error}", task.name),
            details,
        });
    }

    pub fn log_step_execution(&self, task: &Task, outcome: &StepOutcome) {
        let status = if outcome.result.success { LogStatus::Success } else { LogStatus::Failure };
        let mut message = format!(
            "step {} \"{}\" {}",
            outcome.step_index + 1,
            outcome.step_name,
            if outcome.result.success { "succeeded" } else { "failed" }
        );
        if let Some(error) = &outcome.result.error {
            message.push_str(": ");
            message.push_str(error);
        }

        let details = json!({
            "step_index": outcome.step_index,
            "step_name": outcome.step_name,
            "url": outcome.result.url,
            "method": outcome.result.method,
            "headers": outcome.result.headers,
            "body": outcome.result.body,
            "status_code": outcome.result.status_code,
            "response": outcome.result.response,
            "extracted_params": outcome.result.extracted_params,
        });

        self.append(NewLogEntry {
            task_id: task.id,
            task_name: task.name.clone(),
            event: LogEvent::Step,
            status,
            message,
            details,
        });
    }

    fn append(&self, entry: NewLogEntry) {
        if let Err(error) = self.store.add_log(entry) {
            tracing::error!(%error, "failed to append log entry");
        }
    }
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
