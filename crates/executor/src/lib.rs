// SPDX-License-Identifier: MIT

//! Executes a single HTTP [`Step`](hc_core::Step) against a [`Context`]:
//! substitutes placeholders, dispatches the request, parses the response,
//! and extracts named parameters.
//!
//! This crate has no notion of a task or a chain of steps — that sequencing
//! lives in `hc-engine`. It only knows how to run one step and report what
//! happened.

mod error;
mod extract;
mod substitute;

pub use error::StepExecutorError;
pub use substitute::{substitute_body, substitute_headers, substitute_string, substitute_value};

use hc_core::context::{Context, ContextValue};
use hc_core::task::{Method, Step};
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

/// Default per-request timeout, overridable via `RunnerConfig`.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of executing one step.
///
/// `url`, `method`, `headers`, and `body` echo the values actually sent
/// (after placeholder substitution), so a caller can log or display exactly
/// what went over the wire without re-deriving it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    pub success: bool,
    pub status_code: Option<u16>,
    pub response: Option<Value>,
    pub error: Option<String>,
    pub extracted_params: HashMap<String, ContextValue>,
    pub url: String,
    pub method: Method,
    pub headers: HashMap<String, String>,
    pub body: HashMap<String, Value>,
}

/// Executes HTTP steps via `reqwest`.
pub struct StepExecutor {
    client: reqwest::Client,
}

impl StepExecutor {
    /// Build an executor with the given per-request timeout.
    ///
    /// Panics only if the underlying TLS backend fails to initialize, which
    /// `reqwest::Client::builder()` documents as effectively infallible for
    /// the default feature set this workspace enables.
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client }
    }

    /// Execute `step` against `ctx`, never returning `Err` — every failure
    /// mode (timeout, connection, HTTP status, bad JSON) is reported inside
    /// [`StepResult::error`] instead, matching the "a step failure doesn't
    /// abort the process" design of the chain runner above it.
    pub async fn execute(&self, step: &Step, ctx: &Context) -> StepResult {
        let url = substitute_string(&step.url, ctx);
        let headers = substitute_headers(&step.headers, ctx);
        let body = substitute_body(&step.body, ctx);

        let mut result = StepResult {
            success: false,
            status_code: None,
            response: None,
            error: None,
            extracted_params: HashMap::new(),
            url: url.clone(),
            method: step.method,
            headers: headers.clone(),
            body: body.clone(),
        };

        let mut builder = self.client.request(to_reqwest_method(step.method), &url);
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }

        builder = if step.method.sends_json_body() {
            let payload = Value::Object(body.iter().map(|(k, v)| (k.clone(), v.clone())).collect());
            builder.json(&payload)
        } else {
            let params: Vec<(String, String)> =
                body.iter().map(|(k, v)| (k.clone(), value_to_query_string(v))).collect();
            builder.query(&params)
        };

        let response = match builder.send().await {
            Ok(response) => response,
            Err(source) => {
                let err = StepExecutorError::from(source);
                tracing::debug!(step = %step.name, url = %url, error = %err, "step dispatch failed");
                result.error = Some(err.to_string());
                return result;
            }
        };

        let status = response.status();
        result.status_code = Some(status.as_u16());
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));

        let text = match response.text().await {
            Ok(text) => text,
            Err(source) => {
                result.error = Some(StepExecutorError::from(source).to_string());
                return result;
            }
        };

        if is_json {
            result.response = serde_json::from_str::<Value>(&text).ok();
        } else if !text.is_empty() {
            result.response = Some(Value::String(text.clone()));
        }

        if status.is_success() {
            if is_json && result.response.is_none() {
                result.error = Some(StepExecutorError::InvalidJson.to_string());
                return result;
            }
            result.success = true;
            if let Some(response_value) = &result.response {
                result.extracted_params =
                    extract::extract_params(response_value, &step.extract_params).into_iter().collect();
            }
        } else {
            let err = StepExecutorError::Http { status: status.as_u16(), body: text };
            tracing::debug!(step = %step.name, url = %url, error = %err, "step returned error status");
            result.error = Some(err.to_string());
        }

        result
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn value_to_query_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
