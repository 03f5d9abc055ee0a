// SPDX-License-Identifier: MIT

use super::*;

#[test]
fn merge_overwrites_earlier_keys() {
    let mut ctx = Context::new();
    ctx.insert("token", ContextValue::String("a".to_string()));

    let mut extracted = HashMap::new();
    extracted.insert("token".to_string(), ContextValue::String("b".to_string()));
    ctx.merge(extracted);

    assert_eq!(ctx.get("token"), Some(&ContextValue::String("b".to_string())));
}

#[test]
fn missing_key_yields_none() {
    let ctx = Context::new();
    assert_eq!(ctx.get("missing"), None);
    assert!(!ctx.contains("missing"));
}

#[test]
fn display_formats_each_variant_without_quotes() {
    assert_eq!(ContextValue::String("T".to_string()).to_string(), "T");
    assert_eq!(ContextValue::Boolean(true).to_string(), "true");
    assert_eq!(
        ContextValue::Number(serde_json::Number::from(42)).to_string(),
        "42"
    );
}
