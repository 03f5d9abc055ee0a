// SPDX-License-Identifier: MIT

use super::*;
use hc_core::task::ParamType;
use serde_json::json;

fn param(name: &str, path: &str, param_type: ParamType) -> ExtractParam {
    ExtractParam { name: name.to_string(), path: path.to_string(), param_type }
}

#[test]
fn bare_dollar_path_is_rewritten_to_dotted_form() {
    assert_eq!(normalize_path("$data.token"), "$.data.token");
    assert_eq!(normalize_path("$.data.token"), "$.data.token");
}

#[test]
fn string_extraction_takes_first_match() {
    let response = json!({"data": {"token": "T"}});
    let params = vec![param("token", "$.data.token", ParamType::String)];
    let extracted = extract_params(&response, &params);
    assert_eq!(extracted, vec![("token".to_string(), ContextValue::String("T".to_string()))]);
}

#[test]
fn number_extraction_prefers_integer_when_no_fraction() {
    let response = json!({"v": "42"});
    let params = vec![param("n", "$.v", ParamType::Number)];
    let extracted = extract_params(&response, &params);
    assert_eq!(
        extracted,
        vec![("n".to_string(), ContextValue::Number(serde_json::Number::from(42)))]
    );
}

#[test]
fn number_extraction_falls_back_to_float() {
    let response = json!({"v": "3.5"});
    let params = vec![param("n", "$.v", ParamType::Number)];
    let extracted = extract_params(&response, &params);
    let (name, value) = &extracted[0];
    assert_eq!(name, "n");
    assert_eq!(value.to_string(), "3.5");
}

#[test]
fn boolean_extraction_accepts_truthy_words_case_insensitively() {
    let response = json!({"v": "YES"});
    let params = vec![param("flag", "$.v", ParamType::Boolean)];
    let extracted = extract_params(&response, &params);
    assert_eq!(extracted, vec![("flag".to_string(), ContextValue::Boolean(true))]);
}

#[test]
fn string_type_preserves_native_json_number_instead_of_stringifying() {
    let response = json!({"v": 42});
    let params = vec![param("n", "$.v", ParamType::String)];
    let extracted = extract_params(&response, &params);
    assert_eq!(
        extracted,
        vec![("n".to_string(), ContextValue::Number(serde_json::Number::from(42)))]
    );
}

#[test]
fn string_type_preserves_native_json_boolean_instead_of_stringifying() {
    let response = json!({"v": true});
    let params = vec![param("n", "$.v", ParamType::String)];
    let extracted = extract_params(&response, &params);
    assert_eq!(extracted, vec![("n".to_string(), ContextValue::Boolean(true))]);
}

#[test]
fn blank_string_is_skipped_even_for_string_type() {
    let response = json!({"v": ""});
    let params = vec![param("n", "$.v", ParamType::String)];
    assert!(extract_params(&response, &params).is_empty());
}

#[test]
fn no_match_is_skipped_not_an_error() {
    let response = json!({"other": 1});
    let params = vec![param("n", "$.missing", ParamType::String)];
    assert!(extract_params(&response, &params).is_empty());
}

#[test]
fn unparseable_boolean_is_skipped() {
    let response = json!({"v": "maybe"});
    let params = vec![param("flag", "$.v", ParamType::Boolean)];
    assert!(extract_params(&response, &params).is_empty());
}

#[test]
fn multiple_params_extract_independently() {
    let response = json!({"data": {"token": "T", "id": "7"}});
    let params = vec![
        param("token", "$.data.token", ParamType::String),
        param("id", "$.data.id", ParamType::Number),
    ];
    let extracted = extract_params(&response, &params);
    assert_eq!(extracted.len(), 2);
}
