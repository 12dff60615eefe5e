//! The lint pipeline, extracted from the CLI.
//!
//! All output and writes go through the port traits.

use crate::license::check_licenses;
use crate::ports::{FixPort, OutputPort};
use crate::settings::{LintSettings, RunMode};
use metalint_edit::FixError;
use metalint_project::{load_project, LoadError, RemotePort};
use metalint_render::{render_line, render_summary, AUTO_FIXING, CI_NOTICE};
use metalint_rules::{RuleEngine, RulePolicy};
use metalint_types::{Diagnostic, RunSummary};
use tracing::{debug, info};

/// Error type for pipeline results. Every variant maps to exit code 1.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("fix failed: {0}")]
    Fix(#[from] FixError),
    #[error("{0:#}")]
    Internal(#[from] anyhow::Error),
}

/// Outcome of [`run_lint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintOutcome {
    pub summary: RunSummary,
}

impl LintOutcome {
    pub fn exit_code(&self) -> u8 {
        self.summary.exit_code()
    }
}

struct Reporter<'a> {
    mode: RunMode,
    output: &'a mut dyn OutputPort,
    fixes: &'a dyn FixPort,
    summary: RunSummary,
}

impl Reporter<'_> {
    /// Print, count and, outside CI mode, fix at once.
    fn report(&mut self, diagnostic: Diagnostic) -> Result<(), ToolError> {
        self.output.line(&render_line(&diagnostic))?;
        self.summary.record(&diagnostic);

        if let (RunMode::Fix, Some(fix)) = (self.mode, &diagnostic.fix) {
            debug!(path = %fix.path(), kind = fix.kind(), "applying fix");
            self.fixes.apply(fix)?;
            self.summary.fixes_applied += 1;
            self.output.line(AUTO_FIXING)?;
        }
        Ok(())
    }
}

/// Load the project, check license headers, then run every enabled rule.
///
/// Fixes are applied one at a time in diagnostic order. Rules still see the
/// project as loaded, so a rerun is needed to observe earlier fixes.
pub fn run_lint(
    settings: &LintSettings,
    remote: &dyn RemotePort,
    output: &mut dyn OutputPort,
    fixes: &dyn FixPort,
) -> Result<LintOutcome, ToolError> {
    let project = load_project(&settings.cwd, remote)?;
    info!(root = %project.root(), workspaces = project.workspaces.len(), "project loaded");

    let mut reporter = Reporter {
        mode: settings.mode,
        output,
        fixes,
        summary: RunSummary::default(),
    };

    if settings.mode == RunMode::Ci {
        reporter.output.line(CI_NOTICE)?;
    }

    for diagnostic in check_licenses(&project)? {
        reporter.report(diagnostic)?;
    }

    RuleEngine::new()
        .with_policy(RulePolicy::from_config(&project.config.rules))
        .run(&project, |diagnostic| reporter.report(diagnostic))?;

    let summary = reporter.summary;
    info!(summary = %render_summary(&summary), "lint finished");
    Ok(LintOutcome { summary })
}
