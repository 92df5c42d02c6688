use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// The value a user currently has selected.
///
/// Comparison against an option's value is strict: a number never equals
/// its string rendering, so `Number(2)` does not match an option whose value
/// is `"2"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectedValue {
    Text(String),
    Number(Number),
}

impl SelectedValue {
    /// Returns true if `candidate` is strictly equal to this value.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            SelectedValue::Text(text) => text == candidate,
            SelectedValue::Number(_) => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SelectedValue::Text(text) => Some(text),
            SelectedValue::Number(_) => None,
        }
    }
}

impl From<&str> for SelectedValue {
    fn from(value: &str) -> Self {
        SelectedValue::Text(value.to_string())
    }
}

impl From<String> for SelectedValue {
    fn from(value: String) -> Self {
        SelectedValue::Text(value)
    }
}

impl From<i64> for SelectedValue {
    fn from(value: i64) -> Self {
        SelectedValue::Number(Number::from(value))
    }
}

impl From<u64> for SelectedValue {
    fn from(value: u64) -> Self {
        SelectedValue::Number(Number::from(value))
    }
}

impl fmt::Display for SelectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectedValue::Text(text) => f.write_str(text),
            SelectedValue::Number(number) => write!(f, "{number}"),
        }
    }
}
