//! Fix application for metalint.
//!
//! A [`Fix`] is applied on its own, directly to disk, as soon as the
//! diagnostic carrying it is reported. Nothing is batched or previewed.
//!
//! `replace-json-attribute` writes back the *last container* reached by the
//! selector, not the document root. With a one-segment selector the two are
//! the same; with a longer selector the file ends up holding only the nested
//! object. Rules only emit one-segment selectors.

mod error;

pub use error::{FixError, FixResult};

use camino::Utf8Path;
use fs_err as fs;
use metalint_types::Fix;
use serde_json::{Map, Value};
use tracing::debug;

/// Apply one fix to disk.
pub fn apply_fix(fix: &Fix) -> FixResult<()> {
    match fix {
        Fix::ReplaceFile { path, content } => {
            debug!(%path, "replacing file");
            fs::write(path, content).map_err(|e| FixError::io(path, e))
        }
        Fix::ReplaceJsonAttribute {
            path,
            attribute,
            value,
        } => {
            debug!(%path, ?attribute, "replacing json attribute");
            ensure_json_path(path)?;
            let contents = fs::read_to_string(path).map_err(|e| FixError::io(path, e))?;
            let written = replace_json_attribute(path, &contents, attribute, value.clone())?;
            fs::write(path, written).map_err(|e| FixError::io(path, e))
        }
    }
}

/// In-memory form of `replace-json-attribute`: returns the text that would be
/// written to `path`.
pub fn replace_json_attribute(
    path: &Utf8Path,
    contents: &str,
    selector: &[String],
    value: Option<Value>,
) -> FixResult<String> {
    ensure_json_path(path)?;
    let mut doc: Value = serde_json::from_str(contents).map_err(|e| FixError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let target = assign_attribute(&mut doc, selector, value)?;
    let mut out = serde_json::to_string_pretty(target).map_err(|e| FixError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    out.push('\n');
    Ok(out)
}

/// Walk `selector` from `doc`, creating `{}` for missing intermediate keys,
/// then set the last key to `value` (or remove it for `None`).
///
/// Returns the container holding the last key.
pub fn assign_attribute<'a>(
    doc: &'a mut Value,
    selector: &[String],
    value: Option<Value>,
) -> FixResult<&'a Value> {
    let Some((last, parents)) = selector.split_last() else {
        return Err(FixError::EmptySelector);
    };

    let mut target: &'a mut Value = doc;
    let mut segment_name: &str = "<root>";
    for segment in parents {
        target = as_object(target, selector, segment_name)?
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        segment_name = segment;
    }

    let container = as_object(&mut *target, selector, segment_name)?;
    match value {
        Some(value) => {
            container.insert(last.clone(), value);
        }
        None => {
            container.remove(last);
        }
    }

    Ok(&*target)
}

fn as_object<'a>(
    value: &'a mut Value,
    selector: &[String],
    segment: &str,
) -> FixResult<&'a mut Map<String, Value>> {
    value.as_object_mut().ok_or_else(|| FixError::NotAnObject {
        attribute: selector.join("."),
        segment: segment.to_string(),
    })
}

fn ensure_json_path(path: &Utf8Path) -> FixResult<()> {
    if path.as_str().ends_with(".json") {
        Ok(())
    } else {
        Err(FixError::Format {
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sel(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn nested_assignment_creates_intermediates_in_memory() {
        let mut doc = json!({});
        let written = assign_attribute(&mut doc, &sel(&["a", "b"]), Some(json!(5)))
            .unwrap()
            .clone();
        assert_eq!(written, json!({ "b": 5 }));
        assert_eq!(doc, json!({ "a": { "b": 5 } }));
    }

    #[test]
    fn single_segment_returns_root() {
        let mut doc = json!({ "name": "x", "license": "ISC" });
        let written = assign_attribute(&mut doc, &sel(&["license"]), Some(json!("MIT")))
            .unwrap()
            .clone();
        assert_eq!(written, json!({ "name": "x", "license": "MIT" }));
        assert_eq!(written, doc);
    }

    #[test]
    fn none_removes_the_key() {
        let mut doc = json!({ "private": true, "name": "x" });
        assign_attribute(&mut doc, &sel(&["private"]), None).unwrap();
        assert_eq!(doc, json!({ "name": "x" }));
    }

    #[test]
    fn existing_keys_keep_their_position() {
        let out = replace_json_attribute(
            Utf8Path::new("package.json"),
            r#"{"name":"x","version":"1","main":"a.js"}"#,
            &sel(&["version"]),
            Some(json!("2")),
        )
        .unwrap();
        assert_eq!(
            out,
            "{\n  \"name\": \"x\",\n  \"version\": \"2\",\n  \"main\": \"a.js\"\n}\n"
        );
    }

    #[test]
    fn empty_selector_is_rejected() {
        let mut doc = json!({});
        let err = assign_attribute(&mut doc, &[], Some(json!(1))).unwrap_err();
        assert!(matches!(err, FixError::EmptySelector));
    }

    #[test]
    fn scalar_intermediate_is_rejected() {
        let mut doc = json!({ "bugs": "https://example.com" });
        let err = assign_attribute(&mut doc, &sel(&["bugs", "url"]), Some(json!("x"))).unwrap_err();
        assert!(matches!(err, FixError::NotAnObject { ref segment, .. } if segment == "bugs"));

        let mut doc = json!([1]);
        let err = assign_attribute(&mut doc, &sel(&["a"]), Some(json!(1))).unwrap_err();
        assert!(matches!(err, FixError::NotAnObject { .. }));
    }

    #[test]
    fn non_json_path_is_a_format_error() {
        let err = replace_json_attribute(
            Utf8Path::new("README.md"),
            "{}",
            &sel(&["a"]),
            Some(json!(1)),
        )
        .unwrap_err();
        assert!(matches!(err, FixError::Format { .. }));
    }

    #[test]
    fn invalid_document_is_a_parse_error() {
        let err = replace_json_attribute(
            Utf8Path::new("package.json"),
            "{",
            &sel(&["a"]),
            Some(json!(1)),
        )
        .unwrap_err();
        assert!(matches!(err, FixError::Parse { .. }));
    }
}
