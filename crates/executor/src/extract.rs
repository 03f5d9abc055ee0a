// SPDX-License-Identifier: MIT

//! Parameter extraction: evaluate a JSON-path expression against a parsed
//! response and coerce the first match to the declared scalar type.

use hc_core::context::ContextValue;
use hc_core::task::{ExtractParam, ParamType};
use jsonpath_rust::JsonPathQuery;
use serde_json::Value;

const TRUTHY: &[&str] = &["true", "1", "yes", "on"];
const FALSY: &[&str] = &["false", "0", "no", "off"];

/// Accept both `$foo.bar` and the canonical `$.foo.bar` JSON-path forms.
fn normalize_path(path: &str) -> String {
    if let Some(tail) = path.strip_prefix('$') {
        if !tail.starts_with('.') {
            return format!("$.{tail}");
        }
    }
    path.to_string()
}

/// Evaluate `extract_params` against a successful response, returning the
/// named values that extracted cleanly. A no-match, coercion failure, or
/// blank result is skipped (logged by the caller), never an error.
pub fn extract_params(response: &Value, params: &[ExtractParam]) -> Vec<(String, ContextValue)> {
    params
        .iter()
        .filter_map(|param| match extract_one(response, param) {
            Some(value) => Some((param.name.clone(), value)),
            None => {
                tracing::debug!(
                    param = %param.name,
                    path = %param.path,
                    "extraction skipped: no match, blank result, or coercion failure"
                );
                None
            }
        })
        .collect()
}

fn extract_one(response: &Value, param: &ExtractParam) -> Option<ContextValue> {
    let path = normalize_path(&param.path);
    let matches = response.clone().path(&path).ok()?;
    let first = matches.as_array()?.first()?;
    coerce(first, param.param_type)
}

fn coerce(value: &Value, param_type: ParamType) -> Option<ContextValue> {
    let raw = match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    if raw.trim().is_empty() {
        return None;
    }

    match param_type {
        ParamType::String => coerce_string(value, raw),
        ParamType::Number => coerce_number(value, &raw),
        ParamType::Boolean => coerce_boolean(&raw),
    }
}

/// `string` coercion is "unchanged": preserve the JSON-path match's native
/// scalar type rather than stringifying it. Only objects/arrays fall back
/// to their JSON text form, since `ContextValue` has no container variant.
fn coerce_string(value: &Value, raw: String) -> Option<ContextValue> {
    match value {
        Value::String(s) => Some(ContextValue::String(s.clone())),
        Value::Number(n) => Some(ContextValue::Number(n.clone())),
        Value::Bool(b) => Some(ContextValue::Boolean(*b)),
        Value::Null => None,
        Value::Object(_) | Value::Array(_) => Some(ContextValue::String(raw)),
    }
}

fn coerce_number(value: &Value, raw: &str) -> Option<ContextValue> {
    if let Value::Number(n) = value {
        return Some(ContextValue::Number(n.clone()));
    }
    let trimmed = raw.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(ContextValue::Number(serde_json::Number::from(i)));
    }
    let f = trimmed.parse::<f64>().ok()?;
    serde_json::Number::from_f64(f).map(ContextValue::Number)
}

fn coerce_boolean(raw: &str) -> Option<ContextValue> {
    let lowered = raw.trim().to_ascii_lowercase();
    if TRUTHY.contains(&lowered.as_str()) {
        Some(ContextValue::Boolean(true))
    } else if FALSY.contains(&lowered.as_str()) {
        Some(ContextValue::Boolean(false))
    } else {
        None
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
