// SPDX-License-Identifier: MIT

//! Turns a task's schedule fields into a trigger that can compute its next
//! fire time, and parses the five-field unix cron form the data model uses
//! into the six-field form the `cron` crate expects.

use crate::error::ScheduleError;
use chrono::{DateTime, Utc};
use cron::Schedule;
use hc_core::task::{Task, TaskType};
use std::str::FromStr;
use std::time::Duration;

/// A parsed, ready-to-fire schedule for one task.
#[derive(Clone)]
pub enum Trigger {
    Cron(Schedule),
    Interval(Duration),
}

impl Trigger {
    /// Build a trigger from a task's `type`/`cron_expression`/`interval_seconds` fields.
    pub fn from_task(task: &Task) -> Result<Self, ScheduleError> {
        match task.task_type {
            TaskType::Cron => {
                let expr = task.cron_expression.as_deref().ok_or(ScheduleError::MissingCronExpression)?;
                Ok(Self::Cron(parse_cron(expr)?))
            }
            TaskType::Interval => {
                let secs = task.interval_seconds.ok_or(ScheduleError::MissingIntervalSeconds)?;
                if secs == 0 {
                    return Err(ScheduleError::InvalidInterval);
                }
                Ok(Self::Interval(Duration::from_secs(secs)))
            }
        }
    }

    /// The next fire time strictly after `from`.
    pub fn next_after(&self, from: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Cron(schedule) => schedule.after(&from).next(),
            Self::Interval(duration) => chrono::Duration::from_std(*duration).ok().map(|d| from + d),
        }
    }
}

/// Accept the data model's five-field unix cron (`min hour dom month dow`)
/// by prefixing a `0` seconds field, the way the `cron` crate's 6/7-field
/// grammar expects it.
fn parse_cron(expr: &str) -> Result<Schedule, ScheduleError> {
    let six_field = format!("0 {expr}");
    Schedule::from_str(&six_field).map_err(|e| ScheduleError::InvalidCron(e.to_string()))
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod tests;
