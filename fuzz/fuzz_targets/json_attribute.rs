#![no_main]

//! Fuzz target for in-memory `replace-json-attribute`.
//!
//! Arbitrary documents and selectors must produce either an error or valid
//! JSON, never a panic.

use camino::Utf8Path;
use libfuzzer_sys::fuzz_target;
use metalint_edit::{assign_attribute, replace_json_attribute};
use serde_json::Value;

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    contents: String,
    selector: Vec<String>,
    value: Option<String>,
}

fuzz_target!(|input: FuzzInput| {
    let value = input.value.map(Value::String);
    let path = Utf8Path::new("package.json");

    if let Ok(out) = replace_json_attribute(path, &input.contents, &input.selector, value.clone()) {
        serde_json::from_str::<Value>(&out).expect("written text is valid JSON");
    }

    let Ok(mut doc) = serde_json::from_str::<Value>(&input.contents) else {
        return;
    };
    if assign_attribute(&mut doc, &input.selector, value.clone()).is_ok() {
        let mut cursor = &doc;
        for segment in &input.selector {
            cursor = &cursor[segment.as_str()];
        }
        match value {
            Some(value) => assert_eq!(*cursor, value),
            None => assert!(cursor.is_null()),
        }
    }
});
