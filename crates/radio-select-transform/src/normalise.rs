//! Normalisation of raw options into [`CanonicalOption`] records.

use radio_select_model::{CanonicalOption, NormaliseOptions, OptionError, Result, SelectedValue};
use serde_json::{Map, Value};

use crate::coerce::{is_truthy, to_canonical_string};
use crate::dedupe::dedupe_options;
use crate::shape::OptionShape;
use crate::source::option_entries;

/// Normalises a raw option list.
///
/// `source` may be an array, an object wrapping the array under
/// `options.list_field`, or a `value -> label` mapping object. Entries keep
/// their input order; duplicates are dropped when `options.dedupe` is set.
///
/// # Errors
///
/// Returns [`OptionError::InvalidOptionSource`] when no option list can be
/// found and [`OptionError::UnresolvableOptionShape`] for the first entry
/// with no recognisable value or label.
pub fn normalise_options(
    source: &Value,
    options: &NormaliseOptions,
) -> Result<Vec<CanonicalOption>> {
    let entries = option_entries(source, &options.list_field)?;
    let default_value = options.default_value.as_ref();
    let normalised = entries
        .iter()
        .enumerate()
        .map(|(index, raw)| normalise_option(raw, index, default_value))
        .collect::<Result<Vec<_>>>()?;

    let output = dedupe_options(normalised, options.dedupe);
    tracing::debug!(
        entries = entries.len(),
        options = output.len(),
        dedupe = options.dedupe,
        "normalised option list"
    );
    Ok(output)
}

/// Normalises a single raw option. `index` is only used for error reporting.
pub fn normalise_option(
    raw: &Value,
    index: usize,
    default_value: Option<&SelectedValue>,
) -> Result<CanonicalOption> {
    match raw {
        Value::String(_) | Value::Number(_) => {
            let text = to_canonical_string(raw);
            let default = matches_default(&text, default_value);
            Ok(CanonicalOption::from_parts(Map::new(), text.clone(), text, default))
        }
        Value::Object(object) => normalise_object(object, index, default_value)
            .ok_or_else(|| unresolvable(raw, index)),
        _ => Err(unresolvable(raw, index)),
    }
}

fn normalise_object(
    object: &Map<String, Value>,
    index: usize,
    default_value: Option<&SelectedValue>,
) -> Option<CanonicalOption> {
    let shape = OptionShape::detect(object)?;
    let resolved = shape.resolve(object)?;
    let value = to_canonical_string(resolved.value);
    let label = to_canonical_string(resolved.label);
    let default = match object.get("default") {
        Some(explicit) => is_truthy(explicit),
        None => matches_default(&value, default_value),
    };
    tracing::trace!(index, ?shape, value = %value, "resolved option");
    Some(CanonicalOption::from_parts(
        object.clone(),
        value,
        label,
        default,
    ))
}

fn matches_default(value: &str, default_value: Option<&SelectedValue>) -> bool {
    default_value.is_some_and(|default| default.matches(value))
}

fn unresolvable(raw: &Value, index: usize) -> OptionError {
    tracing::debug!(index, "option has no recognisable value or label property");
    OptionError::UnresolvableOptionShape {
        index,
        option: raw.to_string(),
    }
}
