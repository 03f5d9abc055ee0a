// SPDX-License-Identifier: MIT

//! Task and step definitions.

use crate::ids::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// How a task is triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Cron,
    Interval,
}

crate::simple_display! {
    TaskType {
        Cron => "cron",
        Interval => "interval",
    }
}

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Active,
    Paused,
    /// Tombstone. Never re-activated; the id is never reused.
    Deleted,
}

crate::simple_display! {
    TaskStatus {
        Active => "active",
        Paused => "paused",
        Deleted => "deleted",
    }
}

/// HTTP method for a step, normalized to upper case on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Parse a method string case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "PATCH" => Some(Self::Patch),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }

    /// Whether this method sends `body` as a JSON payload (as opposed to query params).
    pub fn sends_json_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

/// Routes through [`Method::parse`] so task bodies with a lowercase or
/// mixed-case `method` (e.g. `"get"`) deserialize the same as uppercase,
/// per the case-insensitive requirement on this field.
impl<'de> Deserialize<'de> for Method {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Method::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid HTTP method \"{raw}\"")))
    }
}

crate::simple_display! {
    Method {
        Get => "GET",
        Post => "POST",
        Put => "PUT",
        Patch => "PATCH",
        Delete => "DELETE",
    }
}

/// The extraction type applied to a JSON-path match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    String,
    Number,
    Boolean,
}

/// One named extraction rule: pull a value out of a step's response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractParam {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub param_type: ParamType,
}

/// One HTTP invocation within a task's chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    pub url: String,
    pub method: Method,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: HashMap<String, Value>,
    #[serde(default)]
    pub extract_params: Vec<ExtractParam>,
}

/// A scheduled unit: metadata, a schedule, and an ordered step list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cron_expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_seconds: Option<u64>,
    pub steps: Vec<Step>,
    #[serde(default = "default_retry_times")]
    pub retry_times: u32,
    pub status: TaskStatus,
    pub created_at: String,
}

fn default_retry_times() -> u32 {
    1
}

impl Task {
    /// True once tombstoned; the id is never reused and the task never
    /// re-enters the scheduler.
    pub fn is_deleted(&self) -> bool {
        self.status == TaskStatus::Deleted
    }

    pub fn is_active(&self) -> bool {
        self.status == TaskStatus::Active
    }
}

/// Payload used to create a new task. Unlike [`Task`], this carries no id,
/// `created_at`, or `status` — the store assigns those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub name: String,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cron_expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_seconds: Option<u64>,
    pub steps: Vec<Step>,
    #[serde(default = "default_retry_times")]
    pub retry_times: u32,
}

/// A shallow patch applied over an existing [`Task`]. Every field is
/// optional; absent fields leave the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "type")]
    pub task_type: Option<TaskType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cron_expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_times: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    /// Merge this patch over `task`, leaving absent fields unchanged.
    pub fn apply_to(self, task: &mut Task) {
        if let Some(name) = self.name {
            task.name = name;
        }
        if let Some(task_type) = self.task_type {
            task.task_type = task_type;
        }
        if self.cron_expression.is_some() {
            task.cron_expression = self.cron_expression;
        }
        if self.interval_seconds.is_some() {
            task.interval_seconds = self.interval_seconds;
        }
        if let Some(steps) = self.steps {
            task.steps = steps;
        }
        if let Some(retry_times) = self.retry_times {
            task.retry_times = retry_times;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
