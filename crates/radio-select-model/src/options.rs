//! Configuration options for option list normalisation.

use serde::{Deserialize, Serialize};

use crate::selected::SelectedValue;

/// Name of the array field an option list may be wrapped in.
pub const DEFAULT_LIST_FIELD: &str = "SelectOptionItems";

/// Options controlling how a raw option list is normalised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormaliseOptions {
    /// Value preset by the server. Options whose value matches it are marked
    /// `default` unless the raw option carries its own `default` flag.
    pub default_value: Option<SelectedValue>,

    /// Drop options whose value or label repeats an earlier option's.
    /// Default: false.
    pub dedupe: bool,

    /// Field holding the option array when the list arrives wrapped in an
    /// object.
    pub list_field: String,
}

impl Default for NormaliseOptions {
    fn default() -> Self {
        Self {
            default_value: None,
            dedupe: false,
            list_field: DEFAULT_LIST_FIELD.to_string(),
        }
    }
}

impl NormaliseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_default_value(mut self, value: impl Into<SelectedValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_dedupe(mut self, enable: bool) -> Self {
        self.dedupe = enable;
        self
    }

    #[must_use]
    pub fn with_list_field(mut self, field: impl Into<String>) -> Self {
        self.list_field = field.into();
        self
    }
}
