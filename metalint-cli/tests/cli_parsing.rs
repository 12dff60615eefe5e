//! CLI behaviour tests.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn metalint() -> Command {
    Command::cargo_bin("metalint").expect("metalint binary")
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Lerna monorepo where package `a` lacks the license `b` declares.
fn create_temp_repo() -> TempDir {
    let td = tempfile::tempdir().expect("tempdir");
    let root = td.path();

    write(
        root,
        "lerna.json",
        r#"{ "version": "1.0.0", "npmClient": "yarn", "useWorkspaces": true }"#,
    );
    write(
        root,
        ".metalint.json",
        r#"{ "rules": { "allow": ["pkg/attributes-consistency", "lerna/*"] } }"#,
    );
    write(
        root,
        "package.json",
        r#"{ "private": true, "workspaces": ["packages/*"] }"#,
    );
    write(root, "packages/a/package.json", r#"{ "name": "@acme/a" }"#);
    write(
        root,
        "packages/b/package.json",
        r#"{ "name": "@acme/b", "license": "MIT" }"#,
    );

    td
}

#[test]
fn test_ci_reports_and_fails() {
    let temp = create_temp_repo();

    metalint()
        .current_dir(temp.path())
        .arg("--ci")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(
            "Running in CI mode (no fixes will be applied)\n",
        ))
        .stdout(predicate::str::contains(
            "- [pkg/attributes-consistency] sub-packages have inconsistent values for attribute license",
        ))
        .stdout(predicate::str::contains("auto-fixing!").not());

    let a = fs::read_to_string(temp.path().join("packages/a/package.json")).unwrap();
    assert!(!a.contains("license"));
}

#[test]
fn test_fix_then_clean_rerun() {
    let temp = create_temp_repo();

    metalint()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("auto-fixing!"));

    metalint()
        .current_dir(temp.path())
        .arg("--ci")
        .assert()
        .success()
        .stdout("Running in CI mode (no fixes will be applied)\n");
}

#[test]
fn test_cwd_flag_finds_root_from_subdirectory() {
    let temp = create_temp_repo();
    let nested = temp.path().join("packages").join("a");

    metalint()
        .arg("--ci")
        .arg("--cwd")
        .arg(&nested)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[pkg/attributes-consistency]"));
}

#[test]
fn test_missing_project_root_is_an_error() {
    let temp = tempfile::tempdir().unwrap();
    let empty = temp.path().join("not-a-repo");
    fs::create_dir_all(&empty).unwrap();

    metalint()
        .arg("--cwd")
        .arg(&empty)
        .env("RUST_LOG", "error")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_list_rules_text() {
    metalint()
        .arg("list-rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("deps/internal"))
        .stdout(predicate::str::contains("lerna/unknown-attributes"));
}

#[test]
fn test_list_rules_json() {
    let output = metalint()
        .args(["list-rules", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rules: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = rules
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    pretty_assertions::assert_eq!(
        ids,
        vec![
            "deps/internal",
            "deps/external",
            "pkg/folder-name",
            "pkg/namespace",
            "pkg/attributes-mandatory",
            "pkg/attributes-consistency",
            "pkg/normalize",
            "lerna/workspaces",
            "lerna/unknown-attributes",
        ]
    );
}

#[test]
fn test_explain_known_rule() {
    metalint()
        .args(["explain", "[deps/external]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RULE: External dependency versions"))
        .stdout(predicate::str::contains("Fixable:  no"));
}

#[test]
fn test_explain_unknown_rule_fails() {
    metalint()
        .args(["explain", "pkg/unknown"])
        .assert()
        .code(1);
}
