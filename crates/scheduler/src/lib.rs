// SPDX-License-Identifier: MIT

//! Owns *when* a task's chain runs: timers (cron/interval), a jobs table
//! keyed by task id, and a per-task non-blocking lock that drops an
//! overlapping fire instead of queueing it.
//!
//! `hc-scheduler` sits above `hc-engine`: it decides whether and when to
//! call [`TaskRunner::run`], but never sequences steps itself.

mod error;
mod trigger;

pub use error::{ScheduleError, SchedulerError};
pub use trigger::Trigger;

use hc_core::clock::Clock;
use hc_core::ids::TaskId;
use hc_core::task::{NewTask, Task, TaskPatch, TaskStatus};
use hc_engine::{Logger, TaskRunner};
use hc_storage::{Store, StoreError};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex as AsyncMutex;
use tokio::task::{AbortHandle, JoinSet};

/// A task's live timer loop, as tracked in the jobs table.
struct JobHandle {
    abort: AbortHandle,
}

/// Schedules and fires task chains, enforcing at-most-one-concurrent-run
/// per task id.
pub struct Scheduler<C: Clock> {
    store: Arc<Store<C>>,
    task_runner: Arc<TaskRunner<C>>,
    logger: Arc<Logger<C>>,
    clock: C,
    jobs: Arc<parking_lot::Mutex<HashMap<TaskId, JobHandle>>>,
    locks: Arc<parking_lot::Mutex<HashMap<TaskId, Arc<AsyncMutex<()>>>>>,
    runs: Arc<AsyncMutex<JoinSet<()>>>,
}

impl<C: Clock> Scheduler<C> {
    pub fn new(store: Arc<Store<C>>, task_runner: Arc<TaskRunner<C>>, logger: Arc<Logger<C>>, clock: C) -> Self {
        Self {
            store,
            task_runner,
            logger,
            clock,
            jobs: Arc::new(parking_lot::Mutex::new(HashMap::new())),
            locks: Arc::new(parking_lot::Mutex::new(HashMap::new())),
            runs: Arc::new(AsyncMutex::new(JoinSet::new())),
        }
    }

    /// Load every task from the store and schedule the active ones. Call
    /// once at process startup, from inside a tokio runtime.
    pub fn bootstrap(&self) -> Result<(), SchedulerError> {
        for task in self.store.load_tasks()? {
            if task.is_active() {
                self.schedule_task(task);
            }
        }
        Ok(())
    }

    /// Create a task and, if it comes up active, schedule it.
    pub fn add_task(&self, new_task: NewTask) -> Result<TaskId, SchedulerError> {
        let id = self.store.add_task(new_task)?;
        let task = self.store.get_task(id)?;
        if task.is_active() {
            self.schedule_task(task);
        }
        Ok(id)
    }

    /// Apply `patch`, then unschedule and (if the result is active)
    /// reschedule fresh, matching the "replace_existing" discipline of
    /// re-derives-from-scratch rather than live-patching a running timer.
    pub fn update_task(&self, id: TaskId, patch: TaskPatch) -> Result<bool, SchedulerError> {
        let updated = self.store.update_task(id, patch)?;
        if !updated {
            return Ok(false);
        }
        self.unschedule(id);
        if let Some(task) = self.store.load_tasks()?.into_iter().find(|t| t.id == id) {
            if task.is_active() {
                self.schedule_task(task);
            }
        }
        Ok(true)
    }

    /// Tombstone a task and remove its timer. The id is never rescheduled.
    pub fn delete_task(&self, id: TaskId) -> Result<bool, SchedulerError> {
        self.unschedule(id);
        Ok(self.store.delete_task(id)?)
    }

    /// Remove a task's timer without deleting it; reversible via [`Self::resume_task`].
    pub fn pause_task(&self, id: TaskId) -> Result<bool, SchedulerError> {
        self.unschedule(id);
        let patch = TaskPatch { status: Some(TaskStatus::Paused), ..TaskPatch::default() };
        Ok(self.store.update_task(id, patch)?)
    }

    /// Mark a task active again and reschedule it.
    pub fn resume_task(&self, id: TaskId) -> Result<bool, SchedulerError> {
        let patch = TaskPatch { status: Some(TaskStatus::Active), ..TaskPatch::default() };
        let updated = self.store.update_task(id, patch)?;
        if updated {
            if let Ok(task) = self.store.get_task(id) {
                self.schedule_task(task);
            }
        }
        Ok(updated)
    }

    /// Fire `id`'s chain immediately, subject to the same per-task lock as
    /// timer-driven fires. Returns `false` only if the task does not exist;
    /// a fire suppressed by an in-progress run still returns `true`.
    pub async fn run_task_now(&self, id: TaskId) -> Result<bool, SchedulerError> {
        let task = match self.store.get_task(id) {
            Ok(task) => task,
            Err(StoreError::NotFound(_)) => return Ok(false),
            Err(other) => return Err(other.into()),
        };
        let lock = self.lock_for(id);
        fire(Arc::new(task), lock, self.task_runner.clone(), self.runs.clone()).await;
        Ok(true)
    }

    /// Stop accepting new fires and wait for any in-flight chain runs to finish.
    pub async fn shutdown(&self) {
        let aborts: Vec<AbortHandle> = self.jobs.lock().drain().map(|(_, job)| job.abort).collect();
        for abort in aborts {
            abort.abort();
        }
        let mut runs = self.runs.lock().await;
        while runs.join_next().await.is_some() {}
    }

    /// Build a trigger for `task` and spin up its timer loop, replacing any
    /// existing job for the same id. Schedule-configuration failures are
    /// logged and leave the task unscheduled, never propagated.
    fn schedule_task(&self, task: Task) {
        self.unschedule(task.id);
        if !task.is_active() {
            return;
        }

        let trigger = match Trigger::from_task(&task) {
            Ok(trigger) => trigger,
            Err(error) => {
                tracing::warn!(task_id = %task.id, %error, "failed to schedule task");
                self.logger.log_task_failure(&task, &error.to_string(), serde_json::json!({}));
                return;
            }
        };

        let abort = self.spawn_loop(task.clone(), trigger);
        self.jobs.lock().insert(task.id, JobHandle { abort });
    }

    fn unschedule(&self, id: TaskId) {
        if let Some(job) = self.jobs.lock().remove(&id) {
            job.abort.abort();
        }
    }

    fn lock_for(&self, id: TaskId) -> Arc<AsyncMutex<()>> {
        self.locks.lock().entry(id).or_insert_with(|| Arc::new(AsyncMutex::new(()))).clone()
    }

    fn spawn_loop(&self, task: Task, trigger: Trigger) -> AbortHandle {
        let task = Arc::new(task);
        let lock = self.lock_for(task.id);
        let clock = self.clock.clone();
        let task_runner = self.task_runner.clone();
        let runs = self.runs.clone();

        let handle = tokio::spawn(async move {
            loop {
                let now = clock.now();
                let Some(next) = trigger.next_after(now) else {
                    break;
                };
                let Ok(delay) = (next - now).to_std() else {
                    tracing::warn!(task_id = %task.id, "trigger produced a non-positive delay, stopping");
                    break;
                };
                tokio::time::sleep(delay).await;
                fire(task.clone(), lock.clone(), task_runner.clone(), runs.clone()).await;
            }
        });
        handle.abort_handle()
    }
}

/// Acquire `lock` without blocking; drop the fire if it's already held.
/// On success, hand the run to `runs` so the caller's timer loop never
/// blocks on the chain's HTTP calls.
async fn fire<C: Clock>(
    task: Arc<Task>,
    lock: Arc<AsyncMutex<()>>,
    task_runner: Arc<TaskRunner<C>>,
    runs: Arc<AsyncMutex<JoinSet<()>>>,
) {
    let Ok(guard) = lock.try_lock_owned() else {
        tracing::info!(task_id = %task.id, task = %task.name, "dropped fire: previous run still in progress");
        return;
    };

    let mut runs = runs.lock().await;
    while runs.try_join_next().is_some() {}
    runs.spawn(async move {
        let _guard = guard;
        task_runner.run(&task).await;
    });
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
