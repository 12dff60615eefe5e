//! Consistency rules for metalint.
//!
//! Every rule implements [`Rule`] and inspects a loaded
//! [`metalint_project::Project`] without touching the filesystem. The
//! [`RuleEngine`] runs the built-in rules in a fixed order, filtered by the
//! `rules.allow` / `rules.deny` patterns of the configuration.

mod engine;
pub mod normalizer;
mod policy;
mod rule;
mod rules;

pub use engine::RuleEngine;
pub use policy::{glob_match, RulePolicy};
pub use rule::{Rule, RuleContext, RuleMeta};
pub use rules::{
    builtin_rules, AttributesConsistencyRule, AttributesMandatoryRule, ExternalDependenciesRule,
    FolderNameRule, InternalDependenciesRule, LernaUnknownAttributesRule, LernaWorkspacesRule,
    NamespaceRule, NormalizeRule,
};
