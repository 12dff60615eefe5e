use metalint_types::{Diagnostic, Fix, RunSummary, Severity};
use pretty_assertions::assert_eq;

#[test]
fn severity_serializes_snake_case() {
    assert_eq!(
        serde_json::to_value(Severity::Error).unwrap(),
        serde_json::json!("error")
    );
    assert_eq!(
        serde_json::to_value(Severity::Warning).unwrap(),
        serde_json::json!("warning")
    );
}

#[test]
fn fix_is_type_tagged() {
    let fix = Fix::ReplaceJsonAttribute {
        path: "packages/a/package.json".into(),
        attribute: vec!["bugs".to_string(), "url".to_string()],
        value: Some(serde_json::json!("https://example.com/issues")),
    };
    let v = serde_json::to_value(&fix).unwrap();
    assert_eq!(v["type"], "replace-json-attribute");
    assert_eq!(v["attribute"], serde_json::json!(["bugs", "url"]));

    let file = Fix::ReplaceFile {
        path: "LICENSE".into(),
        content: "text".to_string(),
    };
    assert_eq!(serde_json::to_value(&file).unwrap()["type"], "replace-file");
}

#[test]
fn removal_fix_omits_value() {
    let fix = Fix::json_attribute("package.json", "private", None);
    let v = serde_json::to_value(&fix).unwrap();
    assert!(v.get("value").is_none());

    let back: Fix = serde_json::from_value(v).unwrap();
    assert_eq!(back, fix);
}

#[test]
fn diagnostic_without_fix_omits_field() {
    let d = Diagnostic::warning("[pkg/normalize]", "something");
    let v = serde_json::to_value(&d).unwrap();
    assert!(v.get("fix").is_none());
    assert_eq!(v["severity"], "warning");
}

#[test]
fn summary_exit_code_counts_warnings() {
    let mut s = RunSummary::default();
    assert_eq!(s.exit_code(), 0);

    s.record(&Diagnostic::warning("[x]", "w"));
    assert_eq!(s.exit_code(), 1);

    s.record(&Diagnostic::error("[x]", "e"));
    assert_eq!(s.errors, 1);
    assert_eq!(s.warnings, 1);
    assert_eq!(s.diagnostics(), 2);
}
