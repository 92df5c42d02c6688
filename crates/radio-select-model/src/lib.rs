//! Data model for radio and select option lists.
//!
//! - **option**: the canonical option record and key/value projection
//! - **selected**: the currently selected value
//! - **record**: attribute access and the boolean attribute state
//! - **options**: normalisation configuration
//! - **error**: error type shared by the workspace

pub mod error;
pub mod option;
pub mod options;
pub mod record;
pub mod selected;

pub use error::{OptionError, Result};
pub use option::{CanonicalOption, KeyValueOption, RESERVED_KEYS};
pub use options::{DEFAULT_LIST_FIELD, NormaliseOptions};
pub use record::{BooleanAttribute, OptionRecord};
pub use selected::SelectedValue;
