//! Rendering helpers for terminal output and generated docs.

use metalint_rules::RuleMeta;
use metalint_types::{Diagnostic, RunSummary};

/// Line printed after a fix has been written.
pub const AUTO_FIXING: &str = "auto-fixing!";

/// Line printed once before linting in CI mode.
pub const CI_NOTICE: &str = "Running in CI mode (no fixes will be applied)";

/// One diagnostic as printed on stdout: `- <code> <message>`.
pub fn render_line(diagnostic: &Diagnostic) -> String {
    format!("- {} {}", diagnostic.code, diagnostic.message)
}

/// Human-readable counters, e.g. `2 errors, 1 warning, 0 fixes applied`.
pub fn render_summary(summary: &RunSummary) -> String {
    format!(
        "{}, {}, {} applied",
        plural(summary.errors, "error"),
        plural(summary.warnings, "warning"),
        plural(summary.fixes_applied, "fix"),
    )
}

/// Markdown table of rules: id, code and title.
pub fn render_rules_md(rules: &[RuleMeta]) -> String {
    let mut out = String::new();
    out.push_str("| Rule | Code | Title |\n");
    out.push_str("|------|------|-------|\n");
    for meta in rules {
        out.push_str(&format!(
            "| `{}` | `{}` | {} |\n",
            meta.id, meta.code, meta.title
        ));
    }
    out
}

fn plural(count: u64, noun: &str) -> String {
    match (count, noun) {
        (1, _) => format!("1 {noun}"),
        (_, "fix") => format!("{count} fixes"),
        _ => format!("{count} {noun}s"),
    }
}
