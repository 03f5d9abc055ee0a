// SPDX-License-Identifier: MIT

//! Stateless dispatcher from admin-style commands to [`Scheduler`]/[`Store`]
//! operations: validates payloads, translates store/scheduler errors into a
//! classified [`AdminError`], and computes the `stats` summary.
//!
//! Stands in for the out-of-scope network admin API — the CLI binary is its
//! one sanctioned caller.

use hc_core::clock::Clock;
use hc_core::ids::{LogId, TaskId};
use hc_core::log_entry::{LogEntry, LogEvent, LogStatus};
use hc_core::task::{NewTask, Step, Task, TaskPatch, TaskType};
use hc_scheduler::{Scheduler, SchedulerError};
use hc_storage::{Store, StoreError};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Classified failure surfaced to a thin client, analogous to the out-of-scope
/// admin API's `{error: message}` envelope plus an HTTP-style status class.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl From<StoreError> for AdminError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(id) => Self::NotFound(format!("task {id} not found")),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<SchedulerError> for AdminError {
    fn from(error: SchedulerError) -> Self {
        Self::Internal(error.to_string())
    }
}

/// Aggregate counts rendered by the `stats` command.
#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub total_tasks: usize,
    pub active_tasks: usize,
    pub today_executions: usize,
    pub success_rate: String,
}

/// The thin facade itself: holds the two collaborators it dispatches to.
pub struct AdminFacade<C: Clock> {
    scheduler: Arc<Scheduler<C>>,
    store: Arc<Store<C>>,
    clock: C,
}

impl<C: Clock> AdminFacade<C> {
    pub fn new(scheduler: Arc<Scheduler<C>>, store: Arc<Store<C>>, clock: C) -> Self {
        Self { scheduler, store, clock }
    }

    pub fn list_tasks(&self) -> Result<Vec<Task>, AdminError> {
        Ok(self.store.load_tasks()?.into_iter().filter(|t| !t.is_deleted()).collect())
    }

    pub fn get_task(&self, id: TaskId) -> Result<Task, AdminError> {
        Ok(self.store.get_task(id)?)
    }

    pub fn create_task(&self, new_task: NewTask) -> Result<TaskId, AdminError> {
        validate_new_task(&new_task)?;
        Ok(self.scheduler.add_task(new_task)?)
    }

    pub fn update_task(&self, id: TaskId, patch: TaskPatch) -> Result<bool, AdminError> {
        validate_patch(&patch)?;
        Ok(self.scheduler.update_task(id, patch)?)
    }

    pub fn delete_task(&self, id: TaskId) -> Result<bool, AdminError> {
        Ok(self.scheduler.delete_task(id)?)
    }

    pub fn pause_task(&self, id: TaskId) -> Result<bool, AdminError> {
        Ok(self.scheduler.pause_task(id)?)
    }

    pub fn resume_task(&self, id: TaskId) -> Result<bool, AdminError> {
        Ok(self.scheduler.resume_task(id)?)
    }

    pub async fn run_task_now(&self, id: TaskId) -> Result<bool, AdminError> {
        Ok(self.scheduler.run_task_now(id).await?)
    }

    /// Logs sorted by timestamp descending, optionally filtered by task and
    /// status, then paginated (`page` is 1-based).
    pub fn list_logs(
        &self,
        task_id: Option<TaskId>,
        status: Option<LogStatus>,
        page: usize,
        limit: usize,
    ) -> Result<Vec<LogEntry>, AdminError> {
        let mut logs = self.store.load_logs(task_id, None)?;
        if let Some(status) = status {
            logs.retain(|l| l.status == status);
        }
        let start = page.saturating_sub(1).saturating_mul(limit);
        Ok(logs.into_iter().skip(start).take(limit).collect())
    }

    pub fn get_log(&self, id: LogId) -> Result<LogEntry, AdminError> {
        self.store.get_log(id)?.ok_or_else(|| AdminError::NotFound(format!("log {id} not found")))
    }

    pub fn clear_logs(&self) -> Result<(), AdminError> {
        Ok(self.store.clear_logs()?)
    }

    /// Today's execution count and success rate are computed from `complete`
    /// log entries whose timestamp falls on the current date.
    pub fn stats(&self) -> Result<Stats, AdminError> {
        let tasks = self.store.load_tasks()?;
        let total_tasks = tasks.iter().filter(|t| !t.is_deleted()).count();
        let active_tasks = tasks.iter().filter(|t| t.is_active()).count();

        let today = self.clock.now_string();
        let today = &today[..10.min(today.len())];
        let logs = self.store.load_logs(None, None)?;
        let todays_completions: Vec<&LogEntry> =
            logs.iter().filter(|l| l.event == LogEvent::Complete && l.timestamp.starts_with(today)).collect();

        let today_executions = todays_completions.len();
        let successes = todays_completions.iter().filter(|l| l.status == LogStatus::Success).count();
        let success_rate = if today_executions == 0 {
            "0%".to_string()
        } else {
            format!("{}%", successes * 100 / today_executions)
        };

        Ok(Stats { total_tasks, active_tasks, today_executions, success_rate })
    }
}

fn validate_new_task(task: &NewTask) -> Result<(), AdminError> {
    if task.name.trim().is_empty() {
        return Err(AdminError::Validation("task name must not be empty".to_string()));
    }
    match task.task_type {
        TaskType::Cron => {
            if task.cron_expression.as_deref().unwrap_or("").trim().is_empty() {
                return Err(AdminError::Validation(
                    "cron tasks require a non-empty cron_expression".to_string(),
                ));
            }
        }
        TaskType::Interval => {
            if task.interval_seconds.unwrap_or(0) == 0 {
                return Err(AdminError::Validation(
                    "interval tasks require a positive interval_seconds".to_string(),
                ));
            }
        }
    }
    if task.steps.is_empty() {
        return Err(AdminError::Validation("steps must not be empty".to_string()));
    }
    task.steps.iter().try_for_each(validate_step)
}

/// Validate whatever fields a patch actually carries; a shallow merge means
/// there's no complete record to cross-check type/schedule consistency
/// against here, so each present field is validated on its own terms.
fn validate_patch(patch: &TaskPatch) -> Result<(), AdminError> {
    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            return Err(AdminError::Validation("task name must not be empty".to_string()));
        }
    }
    if let Some(steps) = &patch.steps {
        if steps.is_empty() {
            return Err(AdminError::Validation("steps must not be empty".to_string()));
        }
        steps.iter().try_for_each(validate_step)?;
    }
    Ok(())
}

fn validate_step(step: &Step) -> Result<(), AdminError> {
    if step.name.trim().is_empty() {
        return Err(AdminError::Validation("step name must not be empty".to_string()));
    }
    if step.url.trim().is_empty() {
        return Err(AdminError::Validation("step url must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "facade_tests.rs"]
mod tests;
