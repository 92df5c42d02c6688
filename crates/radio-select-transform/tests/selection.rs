//! Tests for selected option lookup.

use radio_select_model::{CanonicalOption, SelectedValue};
use radio_select_transform::{find_selected_option, get_selected_label};

fn options() -> Vec<CanonicalOption> {
    vec![
        CanonicalOption::new("a", "Alpha"),
        CanonicalOption::new("b", "Bravo"),
        CanonicalOption::new("b", "Second bravo"),
        CanonicalOption::new("2", "Two"),
    ]
}

#[test]
fn finds_first_matching_option() {
    let options = options();
    let found = find_selected_option(&options, &SelectedValue::from("b")).expect("found");
    assert_eq!(found.label(), "Bravo");
}

#[test]
fn missing_value_finds_nothing() {
    let options = options();
    assert_eq!(find_selected_option(&options, &SelectedValue::from("z")), None);
    assert_eq!(find_selected_option(&[], &SelectedValue::from("a")), None);
}

#[test]
fn lookup_is_strict() {
    let options = options();
    assert_eq!(find_selected_option(&options, &SelectedValue::from(2_i64)), None);
    assert_eq!(find_selected_option(&options, &SelectedValue::from(" a")), None);
}

#[test]
fn selected_label_uses_match() {
    let options = options();
    assert_eq!(
        get_selected_label(&options, &SelectedValue::from("a"), "fallback"),
        "Alpha"
    );
}

#[test]
fn selected_label_falls_back() {
    let options = options();
    assert_eq!(
        get_selected_label(&options, &SelectedValue::from("z"), "fallback"),
        "fallback"
    );
    assert_eq!(get_selected_label(&options, &SelectedValue::from("z"), ""), "");
}
