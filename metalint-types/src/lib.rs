//! Shared DTOs for the metalint workspace.
//!
//! # Design constraints
//! - Manifests are kept as ordered JSON maps; declared key order is observable
//!   in diagnostics and must survive a load/write cycle.
//! - Diagnostics and fixes are plain values; nothing in here performs I/O.

pub mod diagnostic;
pub mod fix;
pub mod lerna;
pub mod manifest;
pub mod report;

pub use diagnostic::{Diagnostic, Severity};
pub use fix::Fix;
pub use lerna::LernaConfig;
pub use manifest::{DependencyScope, Manifest};
pub use report::RunSummary;

/// Stable diagnostic codes.
///
/// Codes group related violations; several rules may share a code family but a
/// code never changes meaning.
pub mod codes {
    pub const DEPS_INTERNAL: &str = "[deps/internal]";
    pub const DEPS_EXTERNAL: &str = "[deps/external]";
    pub const PKG_FOLDER_NAME: &str = "[pkg/folder-name]";
    pub const PKG_NAMESPACE: &str = "[pkg/namespace]";
    pub const PKG_ATTRIBUTES_MANDATORY: &str = "[pkg/attributes-mandatory]";
    pub const PKG_ATTRIBUTES_CONSISTENCY: &str = "[pkg/attributes-consistency]";
    pub const PKG_NORMALIZE: &str = "[pkg/normalize]";
    pub const LERNA_NPM_CLIENT: &str = "[lerna/npm-client]";
    pub const LERNA_USE_WORKSPACES: &str = "[lerna/use-workspaces]";
    pub const LERNA_VERSION: &str = "[lerna/version]";
    pub const LERNA_PACKAGES: &str = "[lerna/packages]";
    pub const LERNA_WORKSPACES: &str = "[lerna/workspaces]";
    pub const LERNA_UNKNOWN_ATTRIBUTE: &str = "[lerna/unknown-attribute]";
    pub const LICENSE_FILE: &str = "[license/file]";
    pub const LICENSE_NOTICE: &str = "[license/notice]";
}

/// Well-known file names.
pub mod files {
    pub const PACKAGE_JSON: &str = "package.json";
    pub const LERNA_JSON: &str = "lerna.json";
    pub const TSCONFIG_JSON: &str = "tsconfig.json";
    pub const METALINT_JSON: &str = ".metalint.json";
    pub const LICENSE: &str = "LICENSE";
}
