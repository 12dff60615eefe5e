//! Property-based tests for deterministic rule output.
//!
//! These tests verify that:
//! - Diagnostics come out in the same order on every run
//! - Dependency conflicts list workspaces in discovery order
//! - Normalizing an already normalized manifest changes nothing

use camino::Utf8PathBuf;
use fs_err as fs;
use metalint_project::{load_project, StaticRemote};
use metalint_rules::normalizer::normalize;
use metalint_rules::RuleEngine;
use proptest::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Strategy to generate distinct package directory names.
fn arb_package_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex(r"[a-z][a-z0-9-]{0,8}").unwrap(),
        1..5,
    )
    .prop_map(|mut names| {
        names.sort();
        names.dedup();
        names
    })
}

fn arb_range() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"\^[0-9]\.[0-9]{1,2}\.[0-9]").unwrap()
}

fn write_monorepo(root: &Utf8PathBuf, packages: &[(String, String)]) {
    fs::write(
        root.join("lerna.json"),
        r#"{ "version": "1.0.0", "npmClient": "yarn", "useWorkspaces": true }"#,
    )
    .unwrap();
    fs::write(
        root.join("package.json"),
        r#"{ "private": true, "workspaces": ["packages/*"] }"#,
    )
    .unwrap();
    for (name, range) in packages {
        let dir = root.join("packages").join(name);
        fs::create_dir_all(&dir).unwrap();
        let pkg = json!({
            "name": format!("@acme/{name}"),
            "version": "1.0.0",
            "dependencies": { "lodash": range }
        });
        fs::write(dir.join("package.json"), pkg.to_string()).unwrap();
    }
}

proptest! {
    #[test]
    fn diagnostics_are_deterministic(
        names in arb_package_names(),
        ranges in prop::collection::vec(arb_range(), 5),
    ) {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8PathBuf::from_path_buf(temp_dir.path().join("mono")).unwrap();
        fs::create_dir_all(&root).unwrap();

        let packages: Vec<(String, String)> = names
            .iter()
            .cloned()
            .zip(ranges.iter().cloned())
            .collect();
        write_monorepo(&root, &packages);

        let run = || {
            let project = load_project(&root, &StaticRemote(None)).unwrap();
            RuleEngine::new().check_all(&project)
        };
        let first = run();
        prop_assert_eq!(&first, &run());

        let conflict = first.iter().find(|d| d.code == "[deps/external]");
        let distinct = packages
            .iter()
            .any(|(_, range)| *range != packages[0].1);
        prop_assert_eq!(conflict.is_some(), distinct);

        if let Some(conflict) = conflict {
            let expected = packages
                .iter()
                .map(|(name, range)| format!("{name}=\"{range}\""))
                .collect::<Vec<_>>()
                .join(", ");
            prop_assert_eq!(
                &conflict.message,
                &format!("found multiple versions of lodash: {expected}")
            );
        }
    }

    #[test]
    fn normalization_is_a_fixed_point(
        version in prop::string::string_regex(r"v?[0-9]\.[0-9]\.[0-9]").unwrap(),
        homepage in prop::string::string_regex(r"(https://)?[a-z]{1,8}\.com").unwrap(),
        author in prop::string::string_regex(r"[A-Z][a-z]{1,6}( <[a-z]{1,5}@x\.com>)?").unwrap(),
        keywords in prop::string::string_regex(r"[a-z]{1,5}(,[a-z]{1,5}){0,3}").unwrap(),
    ) {
        let manifest = json!({
            "name": "pkg",
            "version": version,
            "homepage": homepage,
            "author": author,
            "keywords": keywords,
            "repository": "acme/pkg"
        });
        let Value::Object(map) = manifest else { unreachable!() };

        let once = normalize(&map).unwrap();
        let twice = normalize(&once.manifest).unwrap();
        prop_assert_eq!(once.manifest, twice.manifest);
    }
}
