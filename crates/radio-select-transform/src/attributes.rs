//! Per-option attribute helpers used when rendering an option list.

use radio_select_model::{BooleanAttribute, CanonicalOption, OptionRecord};

/// Whether the boolean attribute `key` should be present on `item`.
///
/// `override_all` forces the attribute on for the whole list; otherwise it
/// is present only when the item's property is the boolean `true`.
pub fn item_is_true<T>(item: &T, key: &str, override_all: bool) -> BooleanAttribute
where
    T: OptionRecord + ?Sized,
{
    if override_all {
        return BooleanAttribute::Present;
    }
    BooleanAttribute::from(item.flag(key) == Some(true))
}

pub fn disabled_option<T>(item: &T, is_disabled: bool) -> BooleanAttribute
where
    T: OptionRecord + ?Sized,
{
    item_is_true(item, "disabled", is_disabled)
}

/// Returns a mapper giving each item an id within the field group.
///
/// String ids are kept; anything else is replaced by
/// `"<field_group_id>--<index>"`.
pub fn set_option_ids<T>(field_group_id: &str) -> impl Fn(T, usize) -> T + use<T>
where
    T: OptionRecord,
{
    let field_group_id = field_group_id.to_string();
    move |item, index| {
        if item.id().is_some() {
            item
        } else {
            let id = format!("{field_group_id}--{index}");
            item.with_id(id)
        }
    }
}

pub fn assign_option_ids<T, I>(options: I, field_group_id: &str) -> Vec<T>
where
    T: OptionRecord,
    I: IntoIterator<Item = T>,
{
    let assign = set_option_ids(field_group_id);
    options
        .into_iter()
        .enumerate()
        .map(|(index, item)| assign(item, index))
        .collect()
}

/// Filter predicate dropping blank placeholder options.
pub fn remove_empty_filter(option: &CanonicalOption) -> bool {
    !option.value().trim().is_empty()
}
