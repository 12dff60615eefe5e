use super::member_names;
use crate::rule::{Rule, RuleContext, RuleMeta};
use metalint_project::{iter_dependencies, Project};
use metalint_types::{codes, Diagnostic};

/// Sibling packages must depend on each other at `^<lerna version>`.
pub struct InternalDependenciesRule;

impl Rule for InternalDependenciesRule {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            id: "deps/internal",
            code: codes::DEPS_INTERNAL,
            title: "Internal dependency versions",
        }
    }

    fn check(&self, _ctx: &RuleContext, project: &Project) -> Vec<Diagnostic> {
        let Some(lerna) = &project.lerna else {
            return vec![];
        };

        let Some(version) = lerna.version() else {
            return vec![Diagnostic::error(
                codes::DEPS_INTERNAL,
                "no 'version' defined in root 'lerna.json'",
            )];
        };

        let expected = format!("^{version}");
        let members = member_names(project);

        iter_dependencies(project)
            .filter(|edge| members.contains(edge.name) && edge.version != expected)
            .map(|edge| {
                Diagnostic::error(
                    codes::DEPS_INTERNAL,
                    format!(
                        "dependency {} from {} has wrong version; found {}, expected {expected}",
                        edge.name, edge.workspace, edge.version
                    ),
                )
            })
            .collect()
    }
}
