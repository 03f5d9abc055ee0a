// SPDX-License-Identifier: MIT

//! Placeholder substitution: `${name}` (canonical) and bare `$name` (legacy)
//! replaced with the corresponding context value in string leaves of a
//! URL, header map, or JSON body.
//!
//! Grounded in the same interpolate-with-regex shape as a template variable
//! expander, generalized to recurse over an arbitrary `serde_json::Value`
//! tree instead of a flat string.

use hc_core::context::Context;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Bound on re-scan iterations so a value that embeds another placeholder
/// (and so on) resolves transitively without risking an unbounded loop on
/// pathological/cyclic input.
const MAX_ITERATIONS: usize = 10;

#[allow(clippy::expect_used)]
static BRACED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid regex"));

#[allow(clippy::expect_used)]
static BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)").expect("valid regex"));

/// Substitute placeholders in a single string against `ctx`.
///
/// `${name}` is canonical and always tried first. Bare `$name` is a legacy
/// form, applied only to names that had no `${name}` occurrence in that same
/// pass's input — it never shadows the canonical form. Unknown names are
/// left intact. Bounded to [`MAX_ITERATIONS`] passes so transitively nested
/// placeholders resolve without looping forever on cyclic input.
pub fn substitute_string(input: &str, ctx: &Context) -> String {
    let mut current = input.to_string();
    for _ in 0..MAX_ITERATIONS {
        let next = substitute_pass(&current, ctx);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn substitute_pass(s: &str, ctx: &Context) -> String {
    let braced_replaced = BRACED.replace_all(s, |caps: &regex::Captures| {
        let name = &caps[1];
        match ctx.get(name) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        }
    });

    BARE.replace_all(&braced_replaced, |caps: &regex::Captures| {
        let name = &caps[1];
        // Bare substitution only applies when the *original* string (before
        // this pass) carried no `${name}` form for this name — the canonical
        // form always wins when both are present.
        if s.contains(&format!("${{{name}}}")) {
            return caps[0].to_string();
        }
        match ctx.get(name) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        }
    })
    .to_string()
}

/// Recursively substitute placeholders over every string leaf of a JSON
/// value tree (used for request bodies, which are arbitrary nested JSON).
pub fn substitute_value(value: &Value, ctx: &Context) -> Value {
    match value {
        Value::String(s) => Value::String(substitute_string(s, ctx)),
        Value::Array(items) => Value::Array(items.iter().map(|v| substitute_value(v, ctx)).collect()),
        Value::Object(map) => {
            Value::Object(map.iter().map(|(k, v)| (k.clone(), substitute_value(v, ctx))).collect())
        }
        // Non-string leaves (numbers, bools, null) are never substituted.
        other => other.clone(),
    }
}

/// Substitute placeholders in every value of a header map. Header names are
/// never substituted, only values.
pub fn substitute_headers(headers: &HashMap<String, String>, ctx: &Context) -> HashMap<String, String> {
    headers.iter().map(|(k, v)| (k.clone(), substitute_string(v, ctx))).collect()
}

/// Substitute placeholders in every value of a request body map.
pub fn substitute_body(body: &HashMap<String, Value>, ctx: &Context) -> HashMap<String, Value> {
    body.iter().map(|(k, v)| (k.clone(), substitute_value(v, ctx))).collect()
}

#[cfg(test)]
#[path = "substitute_tests.rs"]
mod tests;
