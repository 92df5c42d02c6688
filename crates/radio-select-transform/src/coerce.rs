//! Conversion of raw JSON values into the strings options are keyed by.

use serde_json::{Number, Value};

/// Converts a raw option value or label to its canonical string.
///
/// Strings pass through unchanged, whole floats drop their fractional part,
/// booleans become `true`/`false`, null becomes the empty string and arrays
/// or objects become compact JSON text.
pub fn to_canonical_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => format_number(number),
        Value::String(text) => text.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn format_number(number: &Number) -> String {
    if let Some(v) = number.as_i64() {
        return v.to_string();
    }
    if let Some(v) = number.as_u64() {
        return v.to_string();
    }
    match number.as_f64() {
        Some(v) => format_float(v),
        None => number.to_string(),
    }
}

/// Formats a float without trailing zeros, collapsing negative zero to `0`.
pub fn format_float(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Truthiness of an explicit `default` flag that is not a plain boolean.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Short name of a JSON value's type, used in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
