//! Option list normalisation for radio and select inputs.
//!
//! This crate turns loosely shaped option data into [`CanonicalOption`]
//! lists:
//!
//! - **source**: finds the option entries (arrays, wrapped arrays, mappings)
//! - **shape**: the recognised raw option shapes and their priority
//! - **normalise**: maps raw entries to canonical options
//! - **dedupe**: drops options repeating an earlier value or label
//! - **selection**: selected option and label lookup
//! - **attributes**: rendering helpers (disabled, ids, empty filter)
//! - **coerce**: canonical string conversion
//!
//! [`CanonicalOption`]: radio_select_model::CanonicalOption

pub mod attributes;
pub mod coerce;
pub mod dedupe;
pub mod normalise;
pub mod selection;
pub mod shape;
pub mod source;

// Re-export common functions for external use
pub use attributes::{
    assign_option_ids, disabled_option, item_is_true, remove_empty_filter, set_option_ids,
};
pub use coerce::to_canonical_string;
pub use dedupe::dedupe_options;
pub use normalise::{normalise_option, normalise_options};
pub use selection::{find_selected_option, get_selected_label};
pub use shape::OptionShape;
pub use source::{key_value_options, list_options, option_entries};
