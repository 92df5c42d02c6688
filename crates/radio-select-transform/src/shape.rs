//! Recognised raw option shapes.
//!
//! Raw options arrive as objects keyed in one of several conventions. The
//! first shape in [`OptionShape::PRIORITY`] whose marker property is present
//! decides which properties supply the option's value and label.

use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionShape {
    /// `{label, value?}`
    LabelValue,
    /// `{key, value?}`, where `value` is the human readable side.
    KeyValue,
    /// `{Value, Key?}`, where `Key` is the human readable side.
    PascalValueKey,
    /// `{Key, Value?}`
    PascalKeyValue,
    /// `{Name, Id?}`
    PascalNameId,
}

/// The raw properties an option's value and label come from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedProperties<'a> {
    pub value: &'a Value,
    pub label: &'a Value,
}

impl OptionShape {
    pub const PRIORITY: [OptionShape; 5] = [
        OptionShape::LabelValue,
        OptionShape::KeyValue,
        OptionShape::PascalValueKey,
        OptionShape::PascalKeyValue,
        OptionShape::PascalNameId,
    ];

    /// Property whose presence identifies this shape.
    pub fn marker(self) -> &'static str {
        match self {
            OptionShape::LabelValue => "label",
            OptionShape::KeyValue => "key",
            OptionShape::PascalValueKey => "Value",
            OptionShape::PascalKeyValue => "Key",
            OptionShape::PascalNameId => "Name",
        }
    }

    /// First shape in priority order that matches `object`.
    pub fn detect(object: &Map<String, Value>) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|shape| present(object, shape.marker()).is_some())
    }

    /// Names of the `(value, label)` properties for `object`.
    ///
    /// Returns `None` when the shape's marker is absent from `object`.
    pub fn property_names(
        self,
        object: &Map<String, Value>,
    ) -> Option<(&'static str, &'static str)> {
        present(object, self.marker())?;
        let has = |key: &str| present(object, key).is_some();
        let names = match self {
            OptionShape::LabelValue => (if has("value") { "value" } else { "label" }, "label"),
            OptionShape::KeyValue => ("key", if has("value") { "value" } else { "key" }),
            OptionShape::PascalValueKey => ("Value", if has("Key") { "Key" } else { "Value" }),
            // The marker guarantees `Key`, so the `Value` fallback never applies.
            OptionShape::PascalKeyValue => (if has("Key") { "Key" } else { "Value" }, "Key"),
            OptionShape::PascalNameId => (if has("Id") { "Id" } else { "Name" }, "Name"),
        };
        Some(names)
    }

    /// Resolves the raw value and label properties for `object`.
    pub fn resolve(self, object: &Map<String, Value>) -> Option<ResolvedProperties<'_>> {
        let (value, label) = self.property_names(object)?;
        Some(ResolvedProperties {
            value: present(object, value)?,
            label: present(object, label)?,
        })
    }
}

/// A property counts as present when it exists and is not null.
fn present<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}
