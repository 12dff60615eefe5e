use crate::error::LoadError;
use camino::{Utf8Path, Utf8PathBuf};
use glob::{MatchOptions, Pattern};
use std::collections::HashSet;
use tracing::debug;

/// `*` stops at `/` and wildcards skip dot-files.
const OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Expand `patterns` relative to `root` into absolute paths.
///
/// Results keep pattern order; matches of one pattern are sorted and a path
/// matched by several patterns is listed once.
pub fn expand(root: &Utf8Path, patterns: &[String]) -> Result<Vec<Utf8PathBuf>, LoadError> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for pattern in patterns {
        let full = if Utf8Path::new(pattern).is_absolute() {
            pattern.clone()
        } else {
            format!("{}/{}", Pattern::escape(root.as_str()), pattern)
        };

        let entries = glob::glob_with(&full, OPTIONS).map_err(|e| LoadError::Pattern {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;

        let mut matched: Vec<Utf8PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(path) => match Utf8PathBuf::from_path_buf(path) {
                    Ok(path) => Some(path),
                    Err(path) => {
                        debug!(path = %path.display(), "skipping non UTF-8 path");
                        None
                    }
                },
                Err(e) => {
                    debug!(error = %e, "unreadable glob entry");
                    None
                }
            })
            .collect();
        matched.sort();
        debug!(%pattern, count = matched.len(), "expanded glob");

        for path in matched {
            if seen.insert(path.clone()) {
                out.push(path);
            }
        }
    }

    Ok(out)
}

/// [`expand`] `include`, then drop paths whose root-relative form matches any
/// `exclude` pattern.
pub fn expand_filtered(
    root: &Utf8Path,
    include: &[String],
    exclude: &[String],
) -> Result<Vec<Utf8PathBuf>, LoadError> {
    let exclude = exclude
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| LoadError::Pattern {
                pattern: p.clone(),
                message: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut paths = expand(root, include)?;
    paths.retain(|path| {
        let rel = path.strip_prefix(root).unwrap_or(path);
        !exclude
            .iter()
            .any(|pattern| pattern.matches_with(rel.as_str(), OPTIONS))
    });
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fs_err as fs;
    use pretty_assertions::assert_eq;

    fn tree(files: &[&str]) -> (tempfile::TempDir, Utf8PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
        for file in files {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "").unwrap();
        }
        (tmp, root)
    }

    fn rel(root: &Utf8Path, paths: Vec<Utf8PathBuf>) -> Vec<String> {
        paths
            .into_iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string())
            .collect()
    }

    #[test]
    fn expands_in_pattern_order_without_duplicates() {
        let (_tmp, root) = tree(&["b/x.ts", "a/y.ts", "a/z.js"]);
        let out = expand(&root, &["b/*.ts".to_string(), "*/*.ts".to_string()]).unwrap();
        assert_eq!(rel(&root, out), vec!["b/x.ts", "a/y.ts"]);
    }

    #[test]
    fn star_does_not_cross_directories() {
        let (_tmp, root) = tree(&["src/a.ts", "src/deep/b.ts"]);
        let out = expand(&root, &["src/*.ts".to_string()]).unwrap();
        assert_eq!(rel(&root, out), vec!["src/a.ts"]);

        let out = expand(&root, &["src/**/*.ts".to_string()]).unwrap();
        assert_eq!(rel(&root, out), vec!["src/a.ts", "src/deep/b.ts"]);
    }

    #[test]
    fn excludes_are_root_relative() {
        let (_tmp, root) = tree(&["src/a.ts", "src/generated/b.ts"]);
        let out = expand_filtered(
            &root,
            &["src/**/*.ts".to_string()],
            &["src/generated/**".to_string()],
        )
        .unwrap();
        assert_eq!(rel(&root, out), vec!["src/a.ts"]);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let (_tmp, root) = tree(&[]);
        let err = expand(&root, &["[".to_string()]).unwrap_err();
        assert!(matches!(err, LoadError::Pattern { .. }));
    }
}
