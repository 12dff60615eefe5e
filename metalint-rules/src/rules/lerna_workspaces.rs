use crate::rule::{Rule, RuleContext, RuleMeta};
use metalint_project::Project;
use metalint_types::{codes, Diagnostic, Fix};
use serde_json::json;

/// `lerna.json` must delegate package discovery to yarn workspaces.
pub struct LernaWorkspacesRule;

impl Rule for LernaWorkspacesRule {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            id: "lerna/workspaces",
            code: codes::LERNA_WORKSPACES,
            title: "Lerna uses yarn workspaces",
        }
    }

    fn check(&self, _ctx: &RuleContext, project: &Project) -> Vec<Diagnostic> {
        let Some(lerna) = &project.lerna else {
            return Vec::new();
        };
        let path = project.lerna_path();
        let mut out = Vec::new();

        if lerna.npm_client() != Some("yarn") {
            out.push(
                Diagnostic::error(
                    codes::LERNA_NPM_CLIENT,
                    "lerna.json should specify 'yarn' as 'npmClient' (reason: workspaces!)",
                )
                .with_fix(Fix::json_attribute(path.clone(), "npmClient", Some(json!("yarn")))),
            );
        }

        if !lerna.use_workspaces() {
            out.push(
                Diagnostic::error(
                    codes::LERNA_USE_WORKSPACES,
                    "lerna.json should specify 'true' as 'useWorkspaces'",
                )
                .with_fix(Fix::json_attribute(path.clone(), "useWorkspaces", Some(json!(true)))),
            );
        }

        if !lerna.contains("version") {
            out.push(Diagnostic::error(
                codes::LERNA_VERSION,
                "lerna.json should specify a 'version' attribute for sub-packages",
            ));
        }

        for section in ["packages", "workspaces"] {
            if lerna.contains(section) {
                let code = if section == "packages" {
                    codes::LERNA_PACKAGES
                } else {
                    codes::LERNA_WORKSPACES
                };
                out.push(Diagnostic::warning(
                    code,
                    format!(
                        "consider moving the '{section}' section of lerna.json to 'workspaces' section of package.json"
                    ),
                ));
            }
        }

        out
    }
}
