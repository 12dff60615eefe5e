use crate::config::{self, MetalintConfig};
use crate::error::LoadError;
use crate::globs;
use crate::model::{Project, Workspace};
use crate::remote::{lookup_remote, RemotePort};
use crate::repo::{FsRepoView, RepoView};
use crate::root::find_project_root;
use camino::{Utf8Path, Utf8PathBuf};
use metalint_license::{load_license, LicenseTexts};
use metalint_types::files::{LERNA_JSON, PACKAGE_JSON, TSCONFIG_JSON};
use metalint_types::{LernaConfig, Manifest};
use rayon::prelude::*;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Build the project model for the tree containing `cwd`.
pub fn load_project(cwd: &Utf8Path, remote: &dyn RemotePort) -> Result<Project, LoadError> {
    let root = find_project_root(cwd)?;
    let name = root.file_name().unwrap_or(root.as_str()).to_string();
    let view = FsRepoView::new(root.clone());

    let config = config::load_or_default(&root)?;
    let lerna = view
        .read_optional_json(Utf8Path::new(LERNA_JSON))?
        .map(|value| expect_object(&root.join(LERNA_JSON), value).map(LernaConfig::new))
        .transpose()?;
    let pkg = load_manifest(&view, &root)?;

    let mut patterns = pkg.workspace_patterns();
    if let Some(lerna) = &lerna {
        patterns.extend(lerna.packages());
    }
    let dirs = discover_workspaces(&root, &patterns)?;

    let mut workspaces = dirs
        .par_iter()
        .map(|dir| load_workspace(&view, dir))
        .collect::<Result<Vec<_>, _>>()?;

    if workspaces.is_empty() {
        debug!("no member packages declared, using the root as the only workspace");
        workspaces.push(Workspace {
            name: name.clone(),
            root: root.clone(),
            pkg: pkg.clone(),
            tsconfig: load_tsconfig(&view, &root)?,
            sub_workspace: false,
        });
    }

    info!(
        packages = ?workspaces.iter().map(|ws| ws.name.as_str()).collect::<Vec<_>>(),
        "found packages"
    );

    let license = render_license(&config, &root);
    let git = lookup_remote(remote, &root);

    Ok(Project {
        root,
        name,
        pkg,
        config,
        license,
        lerna,
        git,
        workspaces,
    })
}

/// Directories matched by the workspace globs that contain a `package.json`.
pub fn discover_workspaces(
    root: &Utf8Path,
    patterns: &[String],
) -> Result<Vec<Utf8PathBuf>, LoadError> {
    debug!(?patterns, "listing packages");
    let dirs = globs::expand(root, patterns)?
        .into_iter()
        .filter(|path| path.is_dir() && path.join(PACKAGE_JSON).is_file())
        .collect();
    Ok(dirs)
}

fn load_workspace(view: &dyn RepoView, dir: &Utf8Path) -> Result<Workspace, LoadError> {
    debug!(%dir, "loading workspace");
    Ok(Workspace {
        name: dir.file_name().unwrap_or(dir.as_str()).to_string(),
        root: dir.to_path_buf(),
        pkg: load_manifest(view, dir)?,
        tsconfig: load_tsconfig(view, dir)?,
        sub_workspace: true,
    })
}

fn load_manifest(view: &dyn RepoView, dir: &Utf8Path) -> Result<Manifest, LoadError> {
    let path = dir.join(PACKAGE_JSON);
    let value = view.read_json(&path)?;
    expect_object(&path, value).map(Manifest::new)
}

fn load_tsconfig(view: &dyn RepoView, dir: &Utf8Path) -> Result<Option<Value>, LoadError> {
    view.read_optional_json(&dir.join(TSCONFIG_JSON))
}

fn expect_object(
    path: &Utf8Path,
    value: Value,
) -> Result<serde_json::Map<String, Value>, LoadError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(LoadError::Malformed {
            path: path.to_path_buf(),
            message: "expected a JSON object".to_string(),
        }),
    }
}

/// Render license texts, or `None` when license checks cannot run.
fn render_license(config: &MetalintConfig, root: &Utf8Path) -> Option<LicenseTexts> {
    let Some(license) = &config.license else {
        debug!("no license section in configuration");
        return None;
    };

    let (Some(name), Some(owner), Some(date)) = (&license.name, &license.owner, &license.date)
    else {
        warn!("license information missing, mandatory fields are: owner, date, name");
        return None;
    };

    let templates = license.templates.as_ref().map(|dir| root.join(dir));
    match load_license(name, owner, date, templates.as_deref()) {
        Ok(texts) => Some(texts),
        Err(e) => {
            warn!(error = %e, "license checks disabled");
            None
        }
    }
}
