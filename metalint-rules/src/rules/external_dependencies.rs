use super::member_names;
use crate::rule::{Rule, RuleContext, RuleMeta};
use metalint_project::{iter_dependencies, Project};
use metalint_types::{codes, Diagnostic};
use std::collections::HashMap;

/// Third-party packages must be requested at one version range everywhere.
pub struct ExternalDependenciesRule;

impl Rule for ExternalDependenciesRule {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            id: "deps/external",
            code: codes::DEPS_EXTERNAL,
            title: "External dependency versions",
        }
    }

    fn check(&self, _ctx: &RuleContext, project: &Project) -> Vec<Diagnostic> {
        let members = member_names(project);

        // Groups in first-encounter order.
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(&str, Vec<(&str, String)>)> = Vec::new();
        for edge in iter_dependencies(project) {
            if members.contains(edge.name) {
                continue;
            }
            let slot = *index.entry(edge.name).or_insert_with(|| {
                groups.push((edge.name, Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push((edge.workspace, edge.version));
        }

        groups
            .into_iter()
            .filter(|(_, versions)| versions.iter().any(|(_, v)| *v != versions[0].1))
            .map(|(pkg, versions)| {
                let found = versions
                    .iter()
                    .map(|(ws, v)| format!("{ws}=\"{v}\""))
                    .collect::<Vec<_>>()
                    .join(", ");
                Diagnostic::error(
                    codes::DEPS_EXTERNAL,
                    format!("found multiple versions of {pkg}: {found}"),
                )
            })
            .collect()
    }
}
