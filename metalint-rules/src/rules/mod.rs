use crate::rule::Rule;
use metalint_project::Project;
use std::collections::HashSet;

mod attributes_consistency;
mod attributes_mandatory;
mod external_dependencies;
mod folder_name;
mod internal_dependencies;
mod lerna_unknown_attributes;
mod lerna_workspaces;
mod namespace;
mod normalize;

pub use attributes_consistency::AttributesConsistencyRule;
pub use attributes_mandatory::AttributesMandatoryRule;
pub use external_dependencies::ExternalDependenciesRule;
pub use folder_name::FolderNameRule;
pub use internal_dependencies::InternalDependenciesRule;
pub use lerna_unknown_attributes::LernaUnknownAttributesRule;
pub use lerna_workspaces::LernaWorkspacesRule;
pub use namespace::NamespaceRule;
pub use normalize::NormalizeRule;

/// All rules in evaluation order.
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(InternalDependenciesRule),
        Box::new(ExternalDependenciesRule),
        Box::new(FolderNameRule),
        Box::new(NamespaceRule),
        Box::new(AttributesMandatoryRule),
        Box::new(AttributesConsistencyRule),
        Box::new(NormalizeRule),
        Box::new(LernaWorkspacesRule),
        Box::new(LernaUnknownAttributesRule),
    ]
}

/// Package names of the member workspaces.
fn member_names(project: &Project) -> HashSet<&str> {
    project
        .sub_workspaces()
        .map(|ws| ws.package_name())
        .collect()
}

/// Serialized attribute value as shown in messages, `undefined` when absent.
fn shown(value: Option<&serde_json::Value>) -> String {
    value.map_or_else(|| "undefined".to_string(), serde_json::Value::to_string)
}

#[cfg(test)]
pub(crate) mod testing {
    use camino::Utf8PathBuf;
    use metalint_project::{MetalintConfig, Project, Workspace};
    use metalint_types::{LernaConfig, Manifest};
    use serde_json::Value;

    /// In-memory project rooted at `/repo`.
    pub fn project(workspaces: Vec<(&str, Value)>) -> Project {
        let workspaces = workspaces
            .into_iter()
            .map(|(dir, pkg)| Workspace {
                name: dir.to_string(),
                root: Utf8PathBuf::from(format!("/repo/packages/{dir}")),
                pkg: Manifest::from_value(pkg).expect("object manifest"),
                tsconfig: None,
                sub_workspace: true,
            })
            .collect();
        Project {
            root: "/repo".into(),
            name: "repo".to_string(),
            pkg: Manifest::default(),
            config: MetalintConfig::default(),
            license: None,
            lerna: None,
            git: None,
            workspaces,
        }
    }

    pub fn with_lerna(mut project: Project, lerna: Value) -> Project {
        project.lerna = LernaConfig::from_value(lerna);
        project
    }

    pub fn with_config(mut project: Project, config: &str) -> Project {
        project.config = metalint_project::parse_config(config).expect("valid config");
        project
    }
}
