//! Project model for metalint.
//!
//! Loading happens once per run: find the root, read `.metalint.json`,
//! `package.json` and the optional `lerna.json`, discover member workspaces
//! and load their manifests in parallel, render license texts and look up the
//! git remote. The resulting [`Project`] is read-only for rules.

pub mod config;
mod error;
pub mod globs;
mod load;
mod model;
pub mod remote;
mod repo;
mod root;

pub use config::{
    discover_config, load_config, load_or_default, parse_config, LicenseConfig, MetalintConfig,
    RulesConfig, WorkspacesConfig,
};
pub use error::LoadError;
pub use load::{discover_workspaces, load_project};
pub use model::{iter_dependencies, DependencyEdge, Project, Workspace};
pub use remote::{lookup_remote, parse_remote, GitRemote, RemotePort, ShellGitPort, StaticRemote};
pub use repo::{FsRepoView, RepoView};
pub use root::find_project_root;
