//! Lookup of the option matching the selected value.

use radio_select_model::{CanonicalOption, SelectedValue};

/// The first option whose value strictly equals `value`.
pub fn find_selected_option<'a>(
    options: &'a [CanonicalOption],
    value: &SelectedValue,
) -> Option<&'a CanonicalOption> {
    options.iter().find(|option| value.matches(option.value()))
}

/// Human readable label for a newly selected value.
///
/// Falls back to `fallback` (typically the last label shown) when no option
/// matches, e.g. while an option list is still loading.
pub fn get_selected_label<'a>(
    options: &'a [CanonicalOption],
    new_value: &SelectedValue,
    fallback: &'a str,
) -> &'a str {
    find_selected_option(options, new_value).map_or(fallback, CanonicalOption::label)
}
