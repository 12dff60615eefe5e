//! Golden fixture tests for the rule engine.
//!
//! Each fixture under `tests/fixtures/<name>/` at the workspace root contains:
//!
//! - `repo/` - the monorepo to lint
//! - `expected/diagnostics.txt` - one `- <code> <message>` line per diagnostic
//!
//! Set `METALINT_BLESS=1` to rewrite the expectations.

use camino::Utf8PathBuf;
use fs_err as fs;
use metalint_project::{load_project, StaticRemote};
use metalint_rules::{RuleEngine, RulePolicy};
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::TempDir;

fn run_fixture_test(fixture_name: &str) {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().expect("workspace root");
    let fixture_path = workspace_root
        .join("tests")
        .join("fixtures")
        .join(fixture_name);

    assert!(
        fixture_path.exists(),
        "Fixture directory does not exist: {}",
        fixture_path.display()
    );

    // The project is named after its directory, so keep it stable.
    let temp_dir = TempDir::new().expect("create temp dir");
    let temp_repo = temp_dir.path().join("repo");
    copy_dir_all(&fixture_path.join("repo"), &temp_repo).expect("copy repo");

    let cwd = Utf8PathBuf::from_path_buf(temp_repo).expect("utf8 path");
    let project = load_project(&cwd, &StaticRemote(None)).expect("load project");
    let engine =
        RuleEngine::new().with_policy(RulePolicy::from_config(&project.config.rules));

    let actual: String = engine
        .check_all(&project)
        .iter()
        .map(|d| format!("- {} {}\n", d.code, d.message))
        .collect();

    let expected_dir = fixture_path.join("expected");
    let expected_path = expected_dir.join("diagnostics.txt");
    let bless = std::env::var_os("METALINT_BLESS").is_some();

    if expected_path.exists() && !bless {
        let expected = fs::read_to_string(&expected_path).expect("read expected diagnostics");
        assert_eq!(
            actual, expected,
            "Diagnostics mismatch for fixture '{}'",
            fixture_name
        );
    } else {
        fs::create_dir_all(&expected_dir).expect("create expected dir");
        fs::write(&expected_path, &actual).expect("write expected diagnostics");
        println!(
            "Wrote expected diagnostics for '{}' at {}",
            fixture_name,
            expected_path.display()
        );
    }
}

/// Recursively copy a directory.
fn copy_dir_all(src: &Path, dst: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let ty = entry.file_type()?;
        let dst_path = dst.join(entry.file_name());
        if ty.is_dir() {
            copy_dir_all(&entry.path(), &dst_path)?;
        } else {
            fs::copy(entry.path(), dst_path)?;
        }
    }
    Ok(())
}

#[test]
fn golden_consistent_monorepo() {
    run_fixture_test("consistent_monorepo");
}

#[test]
fn golden_drifting_versions() {
    run_fixture_test("drifting_versions");
}

#[test]
fn golden_package_metadata() {
    run_fixture_test("package_metadata");
}
