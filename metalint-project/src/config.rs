//! Configuration file loading for metalint.
//!
//! Discovers and loads `.metalint.json` from the project root. Every section
//! is optional; a missing file behaves like an empty one.

use crate::error::LoadError;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use metalint_types::files::METALINT_JSON;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Top-level configuration from `.metalint.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetalintConfig {
    /// License header settings. License checks are skipped when absent.
    pub license: Option<LicenseConfig>,

    /// Expectations shared by all workspaces.
    pub workspaces: WorkspacesConfig,

    /// Rule selection.
    pub rules: RulesConfig,
}

/// License section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LicenseConfig {
    /// Template name, e.g. `MIT`.
    pub name: Option<String>,

    /// Copyright date rendered into `{{ date }}`.
    pub date: Option<String>,

    /// Copyright holder rendered into `{{ owner }}`.
    pub owner: Option<String>,

    /// Globs of files whose header is checked. Required for license checks.
    pub include: Option<Vec<String>>,

    /// Globs (relative to the project root) removed from `include`.
    pub exclude: Vec<String>,

    /// Directory with `<name>/LICENSE.tmpl` and `<name>/notice.tmpl`,
    /// relative to the project root.
    pub templates: Option<Utf8PathBuf>,
}

/// Workspaces section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorkspacesConfig {
    /// Attribute values every workspace manifest must carry. A `null` value
    /// means the attribute must be absent. Keys listed here are exempt from
    /// the generic mandatory, consistency and normalization checks.
    pub pkg: Map<String, Value>,
}

/// Rules section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Allowlist patterns over rule ids. If non-empty, only matching rules run.
    pub allow: Vec<String>,

    /// Denylist patterns over rule ids. Deny wins over allow.
    pub deny: Vec<String>,
}

impl MetalintConfig {
    /// Whether `attribute` is configured under `workspaces.pkg`.
    pub fn is_whitelisted(&self, attribute: &str) -> bool {
        self.workspaces.pkg.contains_key(attribute)
    }
}

/// Discover the `.metalint.json` config file.
///
/// Returns `None` if no config file is found.
pub fn discover_config(project_root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = project_root.join(METALINT_JSON);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a `.metalint.json` config file.
pub fn load_config(path: &Utf8Path) -> Result<MetalintConfig, LoadError> {
    let contents = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_config(&contents).map_err(|e| LoadError::Malformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> serde_json::Result<MetalintConfig> {
    serde_json::from_str(contents)
}

/// Load config from the project root, or return the default if not found.
pub fn load_or_default(project_root: &Utf8Path) -> Result<MetalintConfig, LoadError> {
    match discover_config(project_root) {
        Some(path) => load_config(&path),
        None => Ok(MetalintConfig::default()),
    }
}
