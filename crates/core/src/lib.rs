// SPDX-License-Identifier: MIT

//! Shared domain types for the task runner: ids, the task/step data model,
//! the per-chain-run context, and log entries.
//!
//! This crate has no I/O and no async runtime dependency; it is imported by
//! every other crate in the workspace as the common vocabulary.

#[macro_use]
pub mod macros;

pub mod clock;
pub mod context;
pub mod ids;
pub mod log_entry;
pub mod task;

pub use clock::{Clock, SystemClock};
#[cfg(any(test, feature = "test-support"))]
pub use clock::FakeClock;
pub use context::{Context, ContextValue};
pub use ids::{LogId, TaskId};
pub use log_entry::{LogEntry, LogEvent, LogStatus, NewLogEntry};
pub use task::{ExtractParam, Method, NewTask, ParamType, Step, Task, TaskPatch, TaskStatus, TaskType};
