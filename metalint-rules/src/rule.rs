use metalint_project::Project;
use metalint_types::Diagnostic;
use std::collections::BTreeSet;

/// Static description of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMeta {
    /// Policy key, e.g. `pkg/folder-name`.
    pub id: &'static str,
    /// Main diagnostic code. Lerna rules emit several codes of one family.
    pub code: &'static str,
    pub title: &'static str,
}

/// Shared, read-only inputs derived once per run.
#[derive(Debug, Clone, Default)]
pub struct RuleContext {
    /// Attributes configured under `workspaces.pkg`; the generic manifest
    /// checks leave them alone.
    pub whitelist: BTreeSet<String>,
}

impl RuleContext {
    pub fn from_project(project: &Project) -> Self {
        Self {
            whitelist: project.config.workspaces.pkg.keys().cloned().collect(),
        }
    }

    pub fn is_whitelisted(&self, attribute: &str) -> bool {
        self.whitelist.contains(attribute)
    }
}

/// A consistency check over the loaded project.
///
/// Rules never perform I/O and never mutate the project; fixes are only
/// described.
pub trait Rule {
    fn meta(&self) -> RuleMeta;

    fn check(&self, ctx: &RuleContext, project: &Project) -> Vec<Diagnostic>;
}
