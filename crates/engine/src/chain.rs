// SPDX-License-Identifier: MIT

//! Sequences [`StepExecutor`] invocations for one task: threads an evolving
//! [`Context`] between steps, retries a failing step in place, and fails the
//! whole chain fast at the first step that never recovers.

use hc_core::context::Context;
use hc_core::task::Task;
use hc_executor::{StepExecutor, StepResult};
use std::time::Duration;

/// Delay between retry attempts for a single step.
const RETRY_BACKOFF: Duration = Duration::from_secs(1);

/// Result of one step within a chain run.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub step_index: usize,
    pub step_name: String,
    pub result: StepResult,
}

/// Outcome of running a task's full step list once.
#[derive(Debug, Clone)]
pub struct ChainResult {
    pub success: bool,
    pub steps: Vec<StepOutcome>,
    pub error: Option<String>,
}

/// Runs a task's ordered steps against a [`StepExecutor`].
pub struct ChainRunner {
    executor: StepExecutor,
}

impl ChainRunner {
    pub fn new(executor: StepExecutor) -> Self {
        Self { executor }
    }

    /// Execute every step of `task` in order.
    ///
    /// A step that keeps failing after `task.retry_times` extra attempts
    /// stops the chain immediately; a step that extracts params on success
    /// merges them into the context before the next step runs, so a failed
    /// retry attempt never contributes a half-formed value.
    pub async fn run(&self, task: &Task) -> ChainResult {
        let mut context = Context::new();
        let mut steps = Vec::with_capacity(task.steps.len());

        for (index, step) in task.steps.iter().enumerate() {
            let mut result = self.executor.execute(step, &context).await;
            let mut attempt = 0;
            while !result.success && attempt < task.retry_times {
                attempt += 1;
                tracing::debug!(
                    task_id = %task.id,
                    step = %step.name,
                    attempt,
                    "retrying failed step"
                );
                tokio::time::sleep(RETRY_BACKOFF).await;
                result = self.executor.execute(step, &context).await;
            }

            let succeeded = result.success;
            if succeeded {
                context.merge(result.extracted_params.clone());
            }

            let error = if succeeded {
                None
            } else {
                Some(format!(
                    "step {} failed: {}",
                    index + 1,
                    result.error.as_deref().unwrap_or("unknown error")
                ))
            };

            steps.push(StepOutcome { step_index: index, step_name: step.name.clone(), result });

            if !succeeded {
                return ChainResult { success: false, steps, error };
            }
        }

        ChainResult { success: true, steps, error: None }
    }
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod tests;
