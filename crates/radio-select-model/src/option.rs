//! Canonical option records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys owned by [`CanonicalOption`] itself and never carried as passthrough.
pub const RESERVED_KEYS: [&str; 3] = ["value", "label", "default"];

/// An option in the shape radio and select inputs consume.
///
/// `value` and `label` are always strings. Any other properties the raw
/// option carried (`id`, `disabled`, custom data) are kept as passthrough
/// fields in their original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalOption {
    #[serde(flatten)]
    fields: Map<String, Value>,
    value: String,
    label: String,
    #[serde(default)]
    default: bool,
}

impl CanonicalOption {
    /// Option with no passthrough fields.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self::from_parts(Map::new(), value, label, false)
    }

    /// Builds an option from the raw record it was resolved from.
    ///
    /// The computed `value`, `label` and `default` always replace whatever
    /// the original record held under those keys.
    pub fn from_parts(
        mut original: Map<String, Value>,
        value: impl Into<String>,
        label: impl Into<String>,
        default: bool,
    ) -> Self {
        for key in RESERVED_KEYS {
            original.shift_remove(key);
        }
        Self {
            fields: original,
            value: value.into(),
            label: label.into(),
            default,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_default(&self) -> bool {
        self.default
    }

    /// Passthrough field carried over from the raw option.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    #[must_use]
    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    /// Returns the option with a passthrough field set. Reserved keys are
    /// ignored.
    #[must_use]
    pub fn with_field(mut self, key: &str, value: Value) -> Self {
        if !RESERVED_KEYS.contains(&key) {
            self.fields.insert(key.to_string(), value);
        }
        self
    }

    /// The flat JSON object form, passthrough fields first.
    pub fn to_value(&self) -> Value {
        let mut object = self.fields.clone();
        object.insert("value".to_string(), Value::String(self.value.clone()));
        object.insert("label".to_string(), Value::String(self.label.clone()));
        object.insert("default".to_string(), Value::Bool(self.default));
        Value::Object(object)
    }
}

impl From<CanonicalOption> for Value {
    fn from(option: CanonicalOption) -> Self {
        let CanonicalOption {
            mut fields,
            value,
            label,
            default,
        } = option;
        fields.insert("value".to_string(), Value::String(value));
        fields.insert("label".to_string(), Value::String(label));
        fields.insert("default".to_string(), Value::Bool(default));
        Value::Object(fields)
    }
}

/// Projection of a `Value`/`Key` option for key/value select widgets.
///
/// `key` carries the option's `Value` and `value` its human readable `Key`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyValueOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}
