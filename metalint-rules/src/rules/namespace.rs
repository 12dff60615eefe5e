use crate::rule::{Rule, RuleContext, RuleMeta};
use metalint_project::Project;
use metalint_types::{codes, Diagnostic};

/// Every package name shares the scope of the first named package.
pub struct NamespaceRule;

fn namespace(name: &str) -> &str {
    name.rsplit_once('/').map_or("", |(ns, _)| ns)
}

impl Rule for NamespaceRule {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            id: "pkg/namespace",
            code: codes::PKG_NAMESPACE,
            title: "Package namespace consistency",
        }
    }

    fn check(&self, _ctx: &RuleContext, project: &Project) -> Vec<Diagnostic> {
        let mut names = project.workspaces.iter().filter_map(|ws| ws.pkg.name());
        let Some(first) = names.next() else {
            return vec![];
        };
        let expected = namespace(first);

        names
            .filter(|name| namespace(name) != expected)
            .map(|name| {
                Diagnostic::error(
                    codes::PKG_NAMESPACE,
                    format!(
                        "sub-package {name} has wrong namespace {}, expected {expected}",
                        namespace(name)
                    ),
                )
            })
            .collect()
    }
}
