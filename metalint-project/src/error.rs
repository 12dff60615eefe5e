use camino::Utf8PathBuf;
use thiserror::Error;

/// Failures while building the project model.
///
/// All of these are fatal: rules assume a fully populated project.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No ancestor of `cwd` contains `lerna.json`, `.metalint.json` or `.git`.
    #[error("could not find project root above {cwd}")]
    RootNotFound { cwd: Utf8PathBuf },

    #[error("could not find {path}")]
    NotFound { path: Utf8PathBuf },

    #[error("malformed {path}: {message}")]
    Malformed { path: Utf8PathBuf, message: String },

    #[error("io error reading {path}: {message}")]
    Io { path: Utf8PathBuf, message: String },

    #[error("invalid glob pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
}

impl LoadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. } | LoadError::RootNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::LoadError;

    #[test]
    fn not_found_is_distinct_from_malformed() {
        let missing = LoadError::NotFound {
            path: "a/package.json".into(),
        };
        let broken = LoadError::Malformed {
            path: "a/package.json".into(),
            message: "EOF while parsing".to_string(),
        };
        assert!(missing.is_not_found());
        assert!(!broken.is_not_found());
        assert_eq!(broken.to_string(), "malformed a/package.json: EOF while parsing");
    }
}
