use crate::error::LoadError;
use camino::{Utf8Path, Utf8PathBuf};
use metalint_types::files::{LERNA_JSON, METALINT_JSON};
use tracing::debug;

const ROOT_MARKERS: &[&str] = &[LERNA_JSON, METALINT_JSON, ".git"];

/// Walk `cwd` and its ancestors until a directory holds a root marker.
///
/// `cwd` is canonicalized first so relative paths such as `.` reach the real
/// parent directories.
pub fn find_project_root(cwd: &Utf8Path) -> Result<Utf8PathBuf, LoadError> {
    let cwd = cwd.canonicalize_utf8().map_err(|e| LoadError::Io {
        path: cwd.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(%cwd, "looking for project root");
    for dir in cwd.ancestors() {
        if ROOT_MARKERS.iter().any(|marker| dir.join(marker).exists()) {
            debug!(root = %dir, "found project root");
            return Ok(dir.to_path_buf());
        }
    }
    Err(LoadError::RootNotFound { cwd })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fs_err as fs;

    fn temp_root() -> (tempfile::TempDir, Utf8PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(tmp.path().canonicalize().unwrap()).unwrap();
        (tmp, root)
    }

    #[test]
    fn finds_marker_in_ancestor() {
        let (_tmp, root) = temp_root();
        fs::write(root.join("lerna.json"), "{}").unwrap();
        let nested = root.join("packages/a/src");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested).unwrap(), root);
    }

    #[test]
    fn nearest_marker_wins() {
        let (_tmp, root) = temp_root();
        fs::create_dir_all(root.join(".git")).unwrap();
        let inner = root.join("inner");
        fs::create_dir_all(&inner).unwrap();
        fs::write(inner.join(".metalint.json"), "{}").unwrap();

        let x = inner.join("x");
        fs::create_dir_all(&x).unwrap();
        assert_eq!(find_project_root(&x).unwrap(), inner);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let (_tmp, root) = temp_root();
        let err = find_project_root(&root.join("nope")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
