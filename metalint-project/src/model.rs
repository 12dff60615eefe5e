use crate::config::MetalintConfig;
use crate::remote::GitRemote;
use camino::{Utf8Path, Utf8PathBuf};
use metalint_license::LicenseTexts;
use metalint_types::files::{LERNA_JSON, PACKAGE_JSON};
use metalint_types::{DependencyScope, LernaConfig, Manifest};
use serde_json::Value;

/// One member package.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    /// Directory basename.
    pub name: String,
    pub root: Utf8PathBuf,
    pub pkg: Manifest,
    pub tsconfig: Option<Value>,
    /// `false` only for the synthetic entry standing in for the project root
    /// when no member packages are declared.
    pub sub_workspace: bool,
}

impl Workspace {
    pub fn manifest_path(&self) -> Utf8PathBuf {
        self.root.join(PACKAGE_JSON)
    }

    /// Manifest `name`, falling back to the directory name.
    pub fn package_name(&self) -> &str {
        self.pkg.name().unwrap_or(&self.name)
    }
}

/// The loaded workspace tree. Immutable for the duration of a run.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: Utf8PathBuf,
    /// Basename of `root`.
    pub name: String,
    pub pkg: Manifest,
    pub config: MetalintConfig,
    pub license: Option<LicenseTexts>,
    pub lerna: Option<LernaConfig>,
    pub git: Option<GitRemote>,
    pub workspaces: Vec<Workspace>,
}

impl Project {
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn manifest_path(&self) -> Utf8PathBuf {
        self.root.join(PACKAGE_JSON)
    }

    pub fn lerna_path(&self) -> Utf8PathBuf {
        self.root.join(LERNA_JSON)
    }

    /// Workspaces other than the synthetic root entry.
    pub fn sub_workspaces(&self) -> impl Iterator<Item = &Workspace> {
        self.workspaces.iter().filter(|ws| ws.sub_workspace)
    }
}

/// A declared dependency of one manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge<'a> {
    pub name: &'a str,
    pub version: String,
    pub scope: DependencyScope,
    /// Name of the declaring workspace; the project name for the root manifest.
    pub workspace: &'a str,
}

/// Every dependency edge of the project.
///
/// The root manifest comes first, then each sub-workspace in listed order.
/// Within a manifest the buckets are visited `dependencies`,
/// `devDependencies`, `peerDependencies`, each in declared key order.
pub fn iter_dependencies(project: &Project) -> impl Iterator<Item = DependencyEdge<'_>> {
    let root = std::iter::once((project.name.as_str(), &project.pkg));
    let members = project
        .sub_workspaces()
        .map(|ws| (ws.name.as_str(), &ws.pkg));

    root.chain(members).flat_map(|(owner, pkg)| {
        DependencyScope::ALL.into_iter().flat_map(move |scope| {
            pkg.dependencies(scope)
                .map(move |(name, version)| DependencyEdge {
                    name,
                    version,
                    scope,
                    workspace: owner,
                })
        })
    })
}
