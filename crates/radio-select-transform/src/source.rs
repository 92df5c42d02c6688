//! Resolution of the raw option entries from the shapes option lists arrive in.

use std::borrow::Cow;

use radio_select_model::{KeyValueOption, OptionError, Result};
use serde_json::{Value, json};

use crate::coerce::json_type_name;

/// Returns the option array, unwrapping it from `field` when `source` is an
/// object holding the list under that name.
pub fn list_options<'a>(source: &'a Value, field: &str) -> Result<&'a [Value]> {
    let output = match source {
        Value::Object(map) => map.get(field).unwrap_or(source),
        other => other,
    };
    output
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| OptionError::InvalidOptionSource {
            found: json_type_name(output),
        })
}

/// Returns the raw entries to normalise.
///
/// Arrays and wrapped arrays are borrowed as-is. Any other object is read as
/// a `value -> label` mapping and turned into `{value, label}` entries in key
/// order.
pub fn option_entries<'a>(source: &'a Value, field: &str) -> Result<Cow<'a, [Value]>> {
    match source {
        Value::Object(map) if !map.contains_key(field) => {
            tracing::debug!(entries = map.len(), "reading option list from mapping object");
            Ok(Cow::Owned(
                map.iter()
                    .map(|(value, label)| json!({ "value": value, "label": label }))
                    .collect(),
            ))
        }
        _ => list_options(source, field).map(Cow::Borrowed),
    }
}

/// Projects a `Value`/`Key` option list into key/value pairs.
pub fn key_value_options(source: &Value, field: &str) -> Result<Vec<KeyValueOption>> {
    let list = list_options(source, field)?;
    Ok(list
        .iter()
        .map(|entry| KeyValueOption {
            key: entry.get("Value").cloned(),
            value: entry.get("Key").cloned(),
        })
        .collect())
}
