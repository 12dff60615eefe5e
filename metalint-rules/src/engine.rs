use crate::policy::RulePolicy;
use crate::rule::{Rule, RuleContext};
use crate::rules::builtin_rules;
use metalint_project::Project;
use metalint_types::Diagnostic;
use tracing::debug;

/// Ordered set of rules filtered by a [`RulePolicy`].
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
    policy: RulePolicy,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    /// All built-in rules, no policy.
    pub fn new() -> Self {
        Self::with_rules(builtin_rules())
    }

    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self {
            rules,
            policy: RulePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RulePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Rules that will run, in order.
    pub fn enabled(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules
            .iter()
            .map(|r| -> &dyn Rule { &**r })
            .filter(|r| self.policy.enables(r.meta().id))
    }

    /// Evaluate each enabled rule in turn, handing every diagnostic to `sink`
    /// as soon as it is produced.
    ///
    /// The sink may fail; evaluation stops at the first error.
    pub fn run<E>(
        &self,
        project: &Project,
        mut sink: impl FnMut(Diagnostic) -> Result<(), E>,
    ) -> Result<(), E> {
        let ctx = RuleContext::from_project(project);
        for rule in self.enabled() {
            let meta = rule.meta();
            let diagnostics = rule.check(&ctx, project);
            debug!(rule = meta.id, count = diagnostics.len(), "rule evaluated");
            for diagnostic in diagnostics {
                sink(diagnostic)?;
            }
        }
        Ok(())
    }

    /// Collect every diagnostic of every enabled rule.
    pub fn check_all(&self, project: &Project) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        let collected: Result<(), std::convert::Infallible> = self.run(project, |d| {
            out.push(d);
            Ok(())
        });
        match collected {
            Ok(()) => out,
            Err(never) => match never {},
        }
    }
}
