// SPDX-License-Identifier: MIT

//! Per-chain-run context: extracted parameters threaded between steps.

use std::collections::HashMap;
use std::fmt;

/// A scalar value extracted from a step's response.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ContextValue {
    String(String),
    Number(serde_json::Number),
    Boolean(bool),
}

impl fmt::Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// Ephemeral key/value map accumulated over the course of one chain run.
///
/// Starts empty and only grows on successful extraction; a failed attempt
/// never contributes a value, so later steps can't be poisoned by a
/// mid-retry partial result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    values: HashMap<String, ContextValue>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&ContextValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Merge extracted params into the context. Later keys overwrite earlier ones.
    pub fn merge(&mut self, extracted: HashMap<String, ContextValue>) {
        self.values.extend(extracted);
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ContextValue) {
        self.values.insert(name.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
