//! Tests for option source resolution.

use radio_select_model::{DEFAULT_LIST_FIELD, KeyValueOption, OptionError};
use radio_select_transform::{key_value_options, list_options, option_entries};
use serde_json::json;

#[test]
fn list_options_returns_arrays_unchanged() {
    let source = json!(["a", { "Name": "b" }]);
    let list = list_options(&source, DEFAULT_LIST_FIELD).expect("list");
    assert_eq!(list, source.as_array().expect("array").as_slice());
}

#[test]
fn list_options_unwraps_named_field() {
    let source = json!({ "SelectOptionItems": [1, 2], "Total": 2 });
    let list = list_options(&source, DEFAULT_LIST_FIELD).expect("list");
    assert_eq!(list, [json!(1), json!(2)]);
}

#[test]
fn list_options_rejects_mapping_objects() {
    let err = list_options(&json!({ "a": "A" }), DEFAULT_LIST_FIELD).expect_err("should fail");
    assert_eq!(err, OptionError::InvalidOptionSource { found: "object" });
}

#[test]
fn list_options_rejects_null_wrapped_field() {
    let err = list_options(&json!({ "SelectOptionItems": null }), DEFAULT_LIST_FIELD)
        .expect_err("should fail");
    assert_eq!(err, OptionError::InvalidOptionSource { found: "null" });
}

#[test]
fn option_entries_reads_mapping_objects() {
    let source = json!({ "b": "Bee", "a": "Ay" });
    let entries = option_entries(&source, DEFAULT_LIST_FIELD).expect("entries");
    assert_eq!(
        entries.as_ref(),
        [
            json!({ "value": "b", "label": "Bee" }),
            json!({ "value": "a", "label": "Ay" }),
        ]
    );
}

#[test]
fn option_entries_rejects_primitives() {
    let err = option_entries(&json!(true), DEFAULT_LIST_FIELD).expect_err("should fail");
    assert_eq!(err, OptionError::InvalidOptionSource { found: "boolean" });
}

#[test]
fn key_value_options_swap_value_and_key() {
    let source = json!({
        "SelectOptionItems": [
            { "Value": "M", "Key": "Male" },
            { "Value": 3 },
            "plain",
        ],
    });
    let options = key_value_options(&source, DEFAULT_LIST_FIELD).expect("key value options");
    assert_eq!(
        options,
        vec![
            KeyValueOption {
                key: Some(json!("M")),
                value: Some(json!("Male")),
            },
            KeyValueOption {
                key: Some(json!(3)),
                value: None,
            },
            KeyValueOption::default(),
        ]
    );
}

#[test]
fn key_value_options_require_a_list() {
    let err = key_value_options(&json!("nope"), DEFAULT_LIST_FIELD).expect_err("should fail");
    assert_eq!(err, OptionError::InvalidOptionSource { found: "string" });
}
