//! Rule explanation module for the `metalint explain` command.
//!
//! Provides, for every check metalint runs:
//! - What the check enforces
//! - How to fix a violation by hand

use metalint_types::codes;

/// Information about one check.
#[derive(Debug, Clone)]
pub struct RuleExplanation {
    /// Policy key (e.g., "pkg/normalize"). License checks have no policy key
    /// of their own but are listed under their code family.
    pub key: &'static str,
    /// Diagnostic code (e.g., "[pkg/normalize]").
    pub code: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    /// Detailed description of what the check enforces.
    pub description: &'static str,
    /// Remediation guidance for manual fixes or CI runs.
    pub remediation: &'static str,
    /// Whether diagnostics of this check carry an automatic fix.
    pub fixable: Fixable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixable {
    Always,
    Sometimes,
    Never,
}

/// Registry of all check explanations, in evaluation order.
pub static RULE_REGISTRY: &[RuleExplanation] = &[
    RuleExplanation {
        key: "license/file",
        code: codes::LICENSE_FILE,
        title: "LICENSE files",
        description: r#"Every file named exactly `LICENSE` matched by `license.include` must contain
the full license text rendered from the configured template (`license.name`,
`license.owner`, `license.date`). Surrounding whitespace is ignored."#,
        remediation: r#"Run `metalint` without `--ci` to rewrite the file, or paste the rendered
license text. Files can be skipped with `license.exclude`."#,
        fixable: Fixable::Always,
    },
    RuleExplanation {
        key: "license/notice",
        code: codes::LICENSE_NOTICE,
        title: "License notices",
        description: r#"Every other file matched by `license.include` must start with the rendered
`/*! ... */` notice. Leading whitespace is skipped. A different notice is
replaced; a missing one is prepended. The code after the notice is kept."#,
        remediation: r#"Run `metalint` without `--ci` to rewrite the header. The fix is idempotent:
running it twice changes nothing the second time."#,
        fixable: Fixable::Always,
    },
    RuleExplanation {
        key: "deps/internal",
        code: codes::DEPS_INTERNAL,
        title: "Internal dependency versions",
        description: r#"When the project has a lerna.json, every dependency on a sibling package
must be declared as `^<version>` where `<version>` is the `version` field of
lerna.json. A lerna.json without `version` is reported once."#,
        remediation: r#"Update the dependency range to `^<lerna version>`, or bump lerna.json when
the sibling packages were released together."#,
        fixable: Fixable::Never,
    },
    RuleExplanation {
        key: "deps/external",
        code: codes::DEPS_EXTERNAL,
        title: "External dependency versions",
        description: r#"A third-party package must be requested with the same version range
everywhere it appears, root manifest included. Each conflict lists every
workspace with the range it declares."#,
        remediation: r#"Pick one range and use it in every package.json that depends on the
package."#,
        fixable: Fixable::Never,
    },
    RuleExplanation {
        key: "pkg/folder-name",
        code: codes::PKG_FOLDER_NAME,
        title: "Package name matches folder",
        description: r#"Each sub-package must declare a `name` whose last `/` segment equals the
name of its directory: `packages/ui` holds `ui` or `@scope/ui`."#,
        remediation: r#"Rename the package or move it to a matching directory."#,
        fixable: Fixable::Never,
    },
    RuleExplanation {
        key: "pkg/namespace",
        code: codes::PKG_NAMESPACE,
        title: "Package namespace consistency",
        description: r#"All packages must share the namespace (everything before the last `/`) of
the first package."#,
        remediation: r#"Move the package to the shared scope, e.g. `@acme/name`."#,
        fixable: Fixable::Never,
    },
    RuleExplanation {
        key: "pkg/attributes-mandatory",
        code: codes::PKG_ATTRIBUTES_MANDATORY,
        title: "Mandatory package attributes",
        description: r#"Every package must declare author, bugs, contributors, description, files,
homepage, license, name, repository and version. Attributes configured under
`workspaces.pkg` in .metalint.json are left to the consistency check."#,
        remediation: r#"Add the attribute. `homepage`, `bugs` and `repository` are filled in
automatically when the git `origin` remote is on GitHub, GitLab or
Bitbucket."#,
        fixable: Fixable::Sometimes,
    },
    RuleExplanation {
        key: "pkg/attributes-consistency",
        code: codes::PKG_ATTRIBUTES_CONSISTENCY,
        title: "Package attribute consistency",
        description: r#"Attributes configured under `workspaces.pkg` must have exactly the
configured value in every package (`null` means the attribute must be absent).
Shared attributes (author, browser, bugs, contributors, files, homepage,
license, main, module, repository, types, version) must be identical across
packages; a missing attribute counts as its own value."#,
        remediation: r#"Configured values are fixed per package. For shared attributes the first
deviating package is set to the most common value; rerun until clean."#,
        fixable: Fixable::Always,
    },
    RuleExplanation {
        key: "pkg/normalize",
        code: codes::PKG_NORMALIZE,
        title: "Normalized package.json",
        description: r#"package.json files must already be in the form npm normalizes them to:
string repositories become `{type, url}` objects, people become
`{name, email, url}` objects, versions are clean semver and so on. Other
normalization warnings are reported as warnings."#,
        remediation: r#"Apply the suggested value. A manifest with an invalid name or version is
skipped; fix those first."#,
        fixable: Fixable::Sometimes,
    },
    RuleExplanation {
        key: "lerna/workspaces",
        code: codes::LERNA_WORKSPACES,
        title: "Lerna uses yarn workspaces",
        description: r#"lerna.json must set `npmClient` to `yarn`, `useWorkspaces` to `true` and
declare a `version`. Package globs belong in the `workspaces` section of the
root package.json, not in lerna.json."#,
        remediation: r#"`npmClient` and `useWorkspaces` are fixed automatically. Add `version`
and move `packages`/`workspaces` globs by hand."#,
        fixable: Fixable::Sometimes,
    },
    RuleExplanation {
        key: "lerna/unknown-attributes",
        code: codes::LERNA_UNKNOWN_ATTRIBUTE,
        title: "Known lerna.json attributes",
        description: r#"lerna.json may only contain version, npmClient, npmClientArgs,
useWorkspaces, workspaces, packages, ignoreChanges and command."#,
        remediation: r#"Remove the attribute or correct its spelling."#,
        fixable: Fixable::Never,
    },
];

/// Look up an explanation by key or code.
pub fn lookup_rule(query: &str) -> Option<&'static RuleExplanation> {
    let query_lower = query.trim().to_lowercase();
    let query_normalized = query_lower
        .trim_start_matches('[')
        .trim_end_matches(']')
        .replace('_', "-");

    RULE_REGISTRY.iter().find(|rule| {
        // Match by key (e.g., "pkg/normalize") or by code without brackets
        rule.key == query_normalized
            || rule.code.trim_matches(['[', ']']) == query_normalized
            // Match by the part after the family (e.g., "normalize")
            || rule.key.rsplit('/').next() == Some(query_normalized.as_str())
    })
}

/// List all explained keys.
pub fn list_rule_keys() -> Vec<&'static str> {
    RULE_REGISTRY.iter().map(|r| r.key).collect()
}

pub fn format_fixable(fixable: Fixable) -> &'static str {
    match fixable {
        Fixable::Always => "yes",
        Fixable::Sometimes => "partly",
        Fixable::Never => "no",
    }
}
