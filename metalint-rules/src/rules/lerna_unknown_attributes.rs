use crate::rule::{Rule, RuleContext, RuleMeta};
use metalint_project::Project;
use metalint_types::{codes, Diagnostic};

const ALLOWED_ATTRIBUTES: &[&str] = &[
    "version",
    "npmClient",
    "npmClientArgs",
    "useWorkspaces",
    "workspaces",
    "packages",
    "ignoreChanges",
    "command",
];

/// `lerna.json` may only contain keys lerna understands.
///
/// Unknown keys are not fixed automatically; they may be typos of a key the
/// user meant to set.
pub struct LernaUnknownAttributesRule;

impl Rule for LernaUnknownAttributesRule {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            id: "lerna/unknown-attributes",
            code: codes::LERNA_UNKNOWN_ATTRIBUTE,
            title: "Known lerna.json attributes",
        }
    }

    fn check(&self, _ctx: &RuleContext, project: &Project) -> Vec<Diagnostic> {
        let Some(lerna) = &project.lerna else {
            return Vec::new();
        };
        lerna
            .keys()
            .filter(|key| !ALLOWED_ATTRIBUTES.contains(key))
            .map(|key| {
                Diagnostic::error(
                    codes::LERNA_UNKNOWN_ATTRIBUTE,
                    format!("lerna.json contains unknown attribute '{key}'"),
                )
            })
            .collect()
    }
}
