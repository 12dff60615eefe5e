use crate::rule::{Rule, RuleContext, RuleMeta};
use metalint_project::Project;
use metalint_types::{codes, Diagnostic};

/// The last segment of a member's package name must match its directory.
pub struct FolderNameRule;

impl Rule for FolderNameRule {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            id: "pkg/folder-name",
            code: codes::PKG_FOLDER_NAME,
            title: "Package name matches folder",
        }
    }

    fn check(&self, _ctx: &RuleContext, project: &Project) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        for ws in project.sub_workspaces() {
            let dir = ws.name.as_str();
            match ws.pkg.name() {
                None => out.push(Diagnostic::error(
                    codes::PKG_FOLDER_NAME,
                    format!("sub-package {dir} has not 'name' property defined in 'package.json'"),
                )),
                Some(name) => {
                    let last = name.rsplit('/').next().unwrap_or(name);
                    if last != dir {
                        out.push(Diagnostic::error(
                            codes::PKG_FOLDER_NAME,
                            format!(
                                "name of sub-package {dir}/{name} is not consistent with folder name {dir}"
                            ),
                        ));
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::project;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn check(pkg: serde_json::Value) -> Vec<Diagnostic> {
        let p = project(vec![("pkg-a", pkg)]);
        FolderNameRule.check(&RuleContext::default(), &p)
    }

    #[test]
    fn mismatched_name_is_reported() {
        let out = check(json!({ "name": "@scope/pkg-b" }));
        assert_eq!(out.len(), 1);
        assert_eq!(
            out[0].message,
            "name of sub-package pkg-a/@scope/pkg-b is not consistent with folder name pkg-a"
        );
    }

    #[test]
    fn scoped_and_unscoped_matches_pass() {
        assert!(check(json!({ "name": "@scope/pkg-a" })).is_empty());
        assert!(check(json!({ "name": "pkg-a" })).is_empty());
    }

    #[test]
    fn missing_name_is_reported() {
        let out = check(json!({ "version": "1.0.0" }));
        assert_eq!(out.len(), 1);
        assert!(out[0].message.contains("has not 'name' property"));
    }

    #[test]
    fn synthetic_root_is_skipped() {
        let mut p = project(vec![("pkg-a", json!({ "name": "other" }))]);
        p.workspaces[0].sub_workspace = false;
        assert!(FolderNameRule.check(&RuleContext::default(), &p).is_empty());
    }
}
