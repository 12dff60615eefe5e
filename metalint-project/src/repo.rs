use crate::error::LoadError;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde_json::Value;
use std::io::ErrorKind;

/// Read-only repository access used while loading the project.
pub trait RepoView: Sync {
    fn root(&self) -> &Utf8Path;

    fn read_to_string(&self, rel: &Utf8Path) -> Result<String, LoadError>;

    fn exists(&self, rel: &Utf8Path) -> bool;

    /// Read and parse a JSON document.
    fn read_json(&self, rel: &Utf8Path) -> Result<Value, LoadError> {
        let text = self.read_to_string(rel)?;
        serde_json::from_str(&text).map_err(|e| LoadError::Malformed {
            path: self.root().join(rel),
            message: e.to_string(),
        })
    }

    /// Like [`RepoView::read_json`] but `Ok(None)` when the file is absent.
    fn read_optional_json(&self, rel: &Utf8Path) -> Result<Option<Value>, LoadError> {
        match self.read_json(rel) {
            Ok(value) => Ok(Some(value)),
            Err(LoadError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// File-system backed `RepoView`.
#[derive(Debug, Clone)]
pub struct FsRepoView {
    root: Utf8PathBuf,
}

impl FsRepoView {
    pub fn new(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    fn abs(&self, rel: &Utf8Path) -> Utf8PathBuf {
        if rel.is_absolute() {
            rel.to_path_buf()
        } else {
            self.root.join(rel)
        }
    }
}

impl RepoView for FsRepoView {
    fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn read_to_string(&self, rel: &Utf8Path) -> Result<String, LoadError> {
        let abs = self.abs(rel);
        fs::read_to_string(&abs).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound { path: abs.clone() },
            _ => LoadError::Io {
                path: abs.clone(),
                message: e.to_string(),
            },
        })
    }

    fn exists(&self, rel: &Utf8Path) -> bool {
        self.abs(rel).exists()
    }
}
