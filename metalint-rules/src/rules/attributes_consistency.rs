use crate::rule::{Rule, RuleContext, RuleMeta};
use metalint_project::{Project, Workspace};
use metalint_types::{codes, Diagnostic, Fix};
use serde_json::Value;

pub(crate) const CONSISTENT_ATTRIBUTES: &[&str] = &[
    "author",
    "browser",
    "bugs",
    "contributors",
    "files",
    "homepage",
    "license",
    "main",
    "module",
    "repository",
    "types",
    "version",
];

/// Workspaces agree with the configured attribute values and with each other.
pub struct AttributesConsistencyRule;

impl AttributesConsistencyRule {
    /// Per workspace checks against `workspaces.pkg`.
    fn check_configured(project: &Project, out: &mut Vec<Diagnostic>) {
        let configured = &project.config.workspaces.pkg;
        for ws in &project.workspaces {
            for (attribute, expected) in configured {
                let actual = ws.pkg.get(attribute);
                let message = match (expected, actual) {
                    (Value::Null, None) => continue,
                    (Value::Null, Some(actual)) => format!(
                        "sub-package '{}' defines disabled attribute '{attribute}', got {actual}",
                        ws.name
                    ),
                    (expected, None) => format!(
                        "sub-package '{}' does not define attribute '{attribute}', expected {expected}",
                        ws.name
                    ),
                    (expected, Some(actual)) if actual.to_string() != expected.to_string() => {
                        format!(
                            "sub-package '{}' attribute {attribute} mismatch: got {actual}, expected {expected}",
                            ws.name
                        )
                    }
                    _ => continue,
                };

                let value = (!expected.is_null()).then(|| expected.clone());
                out.push(
                    Diagnostic::error(codes::PKG_ATTRIBUTES_CONSISTENCY, message)
                        .with_fix(Fix::json_attribute(ws.manifest_path(), attribute, value)),
                );
            }
        }
    }

    /// Cross-workspace agreement on one attribute.
    fn check_shared(project: &Project, attribute: &str) -> Option<Diagnostic> {
        let observed: Vec<(&Workspace, Option<String>)> = project
            .workspaces
            .iter()
            .map(|ws| (ws, ws.pkg.serialized(attribute)))
            .collect();

        let mut distinct: Vec<&Option<String>> = Vec::new();
        for (_, value) in &observed {
            if !distinct.contains(&value) {
                distinct.push(value);
            }
        }
        if distinct.len() < 2 {
            return None;
        }

        let found = observed
            .iter()
            .map(|(ws, value)| {
                format!(
                    "{}/package.json[{attribute}]={}",
                    ws.name,
                    value.as_deref().unwrap_or("<missing>")
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        let diagnostic = Diagnostic::error(
            codes::PKG_ATTRIBUTES_CONSISTENCY,
            format!("sub-packages have inconsistent values for attribute {attribute}: {found}"),
        );

        match consensus(&observed) {
            Some((serialized, source)) => {
                let target = observed
                    .iter()
                    .find(|(_, value)| value.as_deref() != Some(serialized))
                    .map(|(ws, _)| *ws);
                let value = source.pkg.get(attribute).cloned();
                match target {
                    Some(target) => Some(diagnostic.with_fix(Fix::json_attribute(
                        target.manifest_path(),
                        attribute,
                        value,
                    ))),
                    None => Some(diagnostic),
                }
            }
            None => Some(diagnostic),
        }
    }
}

/// Most frequent defined value; ties go to the value seen first.
fn consensus<'a>(observed: &'a [(&'a Workspace, Option<String>)]) -> Option<(&'a str, &'a Workspace)> {
    let mut tally: Vec<(&str, usize, &Workspace)> = Vec::new();
    for (ws, value) in observed {
        let Some(value) = value.as_deref() else {
            continue;
        };
        match tally.iter_mut().find(|(v, _, _)| *v == value) {
            Some(entry) => entry.1 += 1,
            None => tally.push((value, 1, ws)),
        }
    }

    let mut best: Option<(&str, usize, &Workspace)> = None;
    for entry in tally {
        if best.is_none_or(|(_, count, _)| entry.1 > count) {
            best = Some(entry);
        }
    }
    best.map(|(value, _, ws)| (value, ws))
}

impl Rule for AttributesConsistencyRule {
    fn meta(&self) -> RuleMeta {
        RuleMeta {
            id: "pkg/attributes-consistency",
            code: codes::PKG_ATTRIBUTES_CONSISTENCY,
            title: "Package attribute consistency",
        }
    }

    fn check(&self, ctx: &RuleContext, project: &Project) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        Self::check_configured(project, &mut out);
        for attribute in CONSISTENT_ATTRIBUTES {
            if ctx.is_whitelisted(attribute) {
                continue;
            }
            out.extend(Self::check_shared(project, attribute));
        }
        out
    }
}
