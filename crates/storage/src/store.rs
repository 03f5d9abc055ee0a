// SPDX-License-Identifier: MIT

//! Durable, crash-safer persistence of tasks and logs as two JSON arrays on disk.

use crate::atomic::{load_json, save_json};
use crate::error::StoreError;
use hc_core::clock::{Clock, SystemClock};
use hc_core::ids::{LogId, TaskId};
use hc_core::log_entry::{LogEntry, NewLogEntry};
use hc_core::task::{NewTask, Task, TaskPatch, TaskStatus};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

/// Persistent repository for task definitions and execution log entries.
///
/// All operations are serialized behind per-file mutexes: reads and writes
/// never interleave, which matters because id assignment is a
/// read-modify-write cycle over the whole array.
pub struct Store<C: Clock = SystemClock> {
    tasks_path: PathBuf,
    logs_path: PathBuf,
    tasks: Mutex<()>,
    logs: Mutex<()>,
    clock: C,
}

impl Store<SystemClock> {
    /// Open (or lazily create) a store rooted at `data_dir`, using the
    /// real system clock for `created_at`/log timestamps.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self::with_clock(data_dir, SystemClock)
    }
}

impl<C: Clock> Store<C> {
    /// Open a store with an injectable clock, for deterministic tests.
    pub fn with_clock(data_dir: impl AsRef<Path>, clock: C) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            tasks_path: data_dir.join("tasks.json"),
            logs_path: data_dir.join("logs.json"),
            tasks: Mutex::new(()),
            logs: Mutex::new(()),
            clock,
        }
    }

    /// All tasks, including tombstoned ones. Missing file yields `[]`.
    pub fn load_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let _guard = self.tasks.lock();
        self.read_tasks()
    }

    /// A single non-deleted task by id.
    pub fn get_task(&self, id: TaskId) -> Result<Task, StoreError> {
        let _guard = self.tasks.lock();
        self.read_tasks()?
            .into_iter()
            .find(|t| t.id == id && !t.is_deleted())
            .ok_or(StoreError::NotFound(id))
    }

    /// Create a task, assigning it the next monotonic id.
    pub fn add_task(&self, new_task: NewTask) -> Result<TaskId, StoreError> {
        let _guard = self.tasks.lock();
        let mut tasks = self.read_tasks()?;

        let next_id = tasks.iter().map(|t| t.id.get()).max().unwrap_or(0) + 1;
        let id = TaskId::new(next_id);

        let task = Task {
            id,
            name: new_task.name,
            task_type: new_task.task_type,
            cron_expression: new_task.cron_expression,
            interval_seconds: new_task.interval_seconds,
            steps: new_task.steps,
            retry_times: new_task.retry_times,
            status: TaskStatus::Active,
            created_at: self.clock.now_string(),
        };

        tasks.push(task);
        self.write_tasks(&tasks)?;
        tracing::debug!(task_id = %id, "added task");
        Ok(id)
    }

    /// Shallow-merge `patch` over the stored record (tombstoned tasks included).
    /// Returns `false` if `id` does not exist at all.
    pub fn update_task(&self, id: TaskId, patch: TaskPatch) -> Result<bool, StoreError> {
        let _guard = self.tasks.lock();
        let mut tasks = self.read_tasks()?;

        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        patch.apply_to(task);
        self.write_tasks(&tasks)?;
        tracing::debug!(task_id = %id, "updated task");
        Ok(true)
    }

    /// Tombstone a task. Returns `false` if `id` does not exist.
    pub fn delete_task(&self, id: TaskId) -> Result<bool, StoreError> {
        let _guard = self.tasks.lock();
        let mut tasks = self.read_tasks()?;

        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.status = TaskStatus::Deleted;
        self.write_tasks(&tasks)?;
        tracing::debug!(task_id = %id, "deleted (tombstoned) task");
        Ok(true)
    }

    /// Log entries, optionally filtered by task id, sorted by timestamp
    /// descending and truncated to `limit`.
    pub fn load_logs(
        &self,
        task_id: Option<TaskId>,
        limit: Option<usize>,
    ) -> Result<Vec<LogEntry>, StoreError> {
        let _guard = self.logs.lock();
        let mut logs = self.read_logs()?;

        if let Some(task_id) = task_id {
            logs.retain(|l| l.task_id == task_id);
        }
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        if let Some(limit) = limit {
            logs.truncate(limit);
        }
        Ok(logs)
    }

    /// A single log entry by id.
    pub fn get_log(&self, id: LogId) -> Result<Option<LogEntry>, StoreError> {
        let _guard = self.logs.lock();
        Ok(self.read_logs()?.into_iter().find(|l| l.id == id))
    }

    /// Append a log entry, assigning it the next monotonic id and the
    /// current timestamp.
    pub fn add_log(&self, new_entry: NewLogEntry) -> Result<LogId, StoreError> {
        let _guard = self.logs.lock();
        let mut logs = self.read_logs()?;

        let next_id = logs.iter().map(|l| l.id.get()).max().unwrap_or(0) + 1;
        let entry = LogEntry {
            id: LogId::new(next_id),
            timestamp: self.clock.now_string(),
            task_id: new_entry.task_id,
            task_name: new_entry.task_name,
            event: new_entry.event,
            status: new_entry.status,
            message: new_entry.message,
            details: new_entry.details,
        };
        let id = entry.id;

        logs.push(entry);
        self.write_logs(&logs)?;
        Ok(id)
    }

    /// Truncate the log store to empty.
    pub fn clear_logs(&self) -> Result<(), StoreError> {
        let _guard = self.logs.lock();
        self.write_logs(&[])?;
        tracing::debug!("cleared logs");
        Ok(())
    }

    fn read_tasks(&self) -> Result<Vec<Task>, StoreError> {
        load_json(&self.tasks_path, Vec::new)
    }

    fn write_tasks(&self, tasks: &[Task]) -> Result<(), StoreError> {
        save_json(&self.tasks_path, &tasks)
    }

    fn read_logs(&self) -> Result<Vec<LogEntry>, StoreError> {
        load_json(&self.logs_path, Vec::new)
    }

    fn write_logs(&self, logs: &[LogEntry]) -> Result<(), StoreError> {
        save_json(&self.logs_path, &logs)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
