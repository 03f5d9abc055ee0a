// SPDX-License-Identifier: MIT

//! Glues [`ChainRunner`] and [`Logger`] together into the exact sequence a
//! scheduled fire performs: start log, run the chain, one step log per
//! executed step, then a completion log. The scheduler owns *when* this
//! runs (timers, the per-task mutex); this module owns *what happens* when
//! it does.

use crate::chain::{ChainResult, ChainRunner};
use crate::logger::Logger;
use hc_core::clock::Clock;
use hc_core::task::Task;
use serde_json::json;

/// Runs one task's chain and records the full log sequence around it.
pub struct TaskRunner<C: Clock> {
    chain_runner: ChainRunner,
    pub(crate) logger: std::sync::Arc<Logger<C>>,
}

impl<C: Clock> TaskRunner<C> {
    pub fn new(chain_runner: ChainRunner, logger: std::sync::Arc<Logger<C>>) -> Self {
        Self { chain_runner, logger }
    }

    /// Run `task`'s chain once, logging `start`, one `step` per executed
    /// step in order, then `complete`. Never panics or propagates a step
    /// failure — the chain's own `error` field carries that.
    pub async fn run(&self, task: &Task) -> ChainResult {
        self.logger.log_task_start(task);

        let result = self.chain_runner.run(task).await;

        for outcome in &result.steps {
            self.logger.log_step_execution(task, outcome);
        }

        if result.success {
            self.logger.log_task_success(task, json!({}));
        } else {
            let error = result.error.as_deref().unwrap_or("unknown error");
            self.logger.log_task_failure(task, error, json!({ "steps": result.steps.len() }));
        }

        result
    }
}

#[cfg(test)]
#[path = "task_runner_tests.rs"]
mod tests;
