use crate::rule::{Rule, RuleContext, RuleMeta};
use metalint_project::{GitRemote, Project, Workspace};
use metalint_types::{codes, Diagnostic, Fix};
use serde_json::{json, Value};

pub(crate) const MANDATORY_ATTRIBUTES: &[&str] = &[
    "author",
    "bugs",
    "contributors",
    "description",
    "files",
    "homepage",
    "license",
    "name",
    "repository",
    "version",
];

/// Manifests must declare the attributes a published package needs.
pub struct AttributesMandatoryRule;

/// Value for `attribute` derivable from the git remote.
fn derived_value(attribute: &str, git: &GitRemote) -> Option<Value> {
    match attribute {
        "homepage" => Some(json!(git.homepage)),
        "bugs" => Some(json!({ "url": git.bugs_url })),
        "repository" => Some(json!({ "type": "git", "url": git.repository })),
        _ => None,
    }
}

fn missing(ws: &Workspace, attribute: &str, git: Option<&GitRemote>) -> Diagnostic {
    let diagnostic = Diagnostic::error(
        codes::PKG_ATTRIBUTES_MANDATORY,
        format!(
            "sub-package '{}' does not specify mandatory attribute '{attribute}'",
            ws.name
        ),
    );
    match git.and_then(|git| derived_value(attribute, git)) {
        Some(value) => {
            diagnostic.with_fix(Fix::json_attribute(ws.manifest_path(), attribute, Some(value)))
        }
        None => diagnostic,
    }
}

impl Rule for AttributesMandatoryRule {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            id: "pkg/attributes-mandatory",
            code: codes::PKG_ATTRIBUTES_MANDATORY,
            title: "Mandatory package attributes",
        }
    }

    fn check(&self, ctx: &RuleContext, project: &Project) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        for ws in &project.workspaces {
            for attribute in MANDATORY_ATTRIBUTES {
                if !ctx.is_whitelisted(attribute) && !ws.pkg.contains(attribute) {
                    out.push(missing(ws, attribute, project.git.as_ref()));
                }
            }
        }
        out
    }
}
