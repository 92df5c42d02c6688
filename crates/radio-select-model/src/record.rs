//! Attribute access shared by canonical options and raw option objects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::option::CanonicalOption;

/// Whether a boolean attribute should be rendered on an option.
///
/// Markup conventionally encodes boolean attributes by presence, so the
/// absent state is distinct from an explicit `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BooleanAttribute {
    Present,
    #[default]
    Absent,
}

impl BooleanAttribute {
    pub fn is_present(self) -> bool {
        matches!(self, BooleanAttribute::Present)
    }

    /// `Some(true)` when present, `None` when the attribute should be omitted.
    pub fn as_attr(self) -> Option<bool> {
        self.is_present().then_some(true)
    }
}

impl From<bool> for BooleanAttribute {
    fn from(value: bool) -> Self {
        if value {
            BooleanAttribute::Present
        } else {
            BooleanAttribute::Absent
        }
    }
}

/// An option-like record whose attributes the rendering helpers inspect.
pub trait OptionRecord {
    /// The attribute under `key`, if it holds a JSON boolean.
    fn flag(&self, key: &str) -> Option<bool>;

    /// The `id` attribute, if it holds a string.
    fn id(&self) -> Option<&str>;

    /// Returns the record with its `id` attribute replaced.
    #[must_use]
    fn with_id(self, id: String) -> Self
    where
        Self: Sized;
}

impl OptionRecord for Map<String, Value> {
    fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    fn id(&self) -> Option<&str> {
        self.get("id").and_then(Value::as_str)
    }

    fn with_id(mut self, id: String) -> Self {
        self.insert("id".to_string(), Value::String(id));
        self
    }
}

impl OptionRecord for CanonicalOption {
    fn flag(&self, key: &str) -> Option<bool> {
        match key {
            "default" => Some(self.is_default()),
            "value" | "label" => None,
            other => self.field(other).and_then(Value::as_bool),
        }
    }

    fn id(&self) -> Option<&str> {
        self.field("id").and_then(Value::as_str)
    }

    fn with_id(self, id: String) -> Self {
        self.with_field("id", Value::String(id))
    }
}
