use crate::normalizer::normalize;
use crate::rule::{Rule, RuleContext, RuleMeta};
use metalint_project::{Project, Workspace};
use metalint_types::{codes, Diagnostic, Fix};
use tracing::debug;

const IGNORED_WARNING: &str = "No README data";

/// Manifests must already be in the form npm would normalize them to.
pub struct NormalizeRule;

fn check_workspace(ctx: &RuleContext, ws: &Workspace, out: &mut Vec<Diagnostic>) {
    let normalized = match normalize(ws.pkg.as_map()) {
        Ok(normalized) => normalized,
        Err(err) => {
            // Left to the mandatory-attribute and folder-name rules.
            debug!(workspace = %ws.name, error = %err, "manifest cannot be normalized");
            return;
        }
    };

    for (attribute, value) in ws.pkg.attributes() {
        if ctx.is_whitelisted(attribute) {
            continue;
        }
        let expected = normalized.manifest.get(attribute);
        if expected.map(|v| v.to_string()) == Some(value.to_string()) {
            continue;
        }

        let shown = expected.map_or_else(|| "<removed>".to_string(), |v| v.to_string());
        out.push(
            Diagnostic::error(
                codes::PKG_NORMALIZE,
                format!("package attribute {attribute} needs to be normalized: {shown}"),
            )
            .with_fix(Fix::json_attribute(
                ws.manifest_path(),
                attribute,
                expected.cloned(),
            )),
        );
    }

    for warning in normalized
        .warnings
        .iter()
        .filter(|w| !w.contains(IGNORED_WARNING))
    {
        out.push(Diagnostic::warning(
            codes::PKG_NORMALIZE,
            format!("additional package.json normalization warning: {warning}"),
        ));
    }
}

impl Rule for NormalizeRule {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            id: "pkg/normalize",
            code: codes::PKG_NORMALIZE,
            title: "Normalized package.json",
        }
    }

    fn check(&self, ctx: &RuleContext, project: &Project) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        for ws in &project.workspaces {
            check_workspace(ctx, ws, &mut out);
        }
        out
    }
}
