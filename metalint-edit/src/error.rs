//! Error types for metalint-edit.
//!
//! Every variant aborts the current run. Fixes applied before the failure stay
//! on disk; there is no rollback.

use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixError {
    /// `replace-json-attribute` targeted a file that is not `.json`.
    #[error("cannot fix non-JSON file {path}")]
    Format { path: Utf8PathBuf },

    #[error("invalid empty JSON selector")]
    EmptySelector,

    /// The selector walks through a value that is not a JSON object.
    #[error("cannot set '{attribute}': '{segment}' is not an object")]
    NotAnObject { attribute: String, segment: String },

    #[error("json parse error in {path}: {message}")]
    Parse { path: Utf8PathBuf, message: String },

    #[error("io error on {path}: {message}")]
    Io { path: Utf8PathBuf, message: String },
}

impl FixError {
    pub(crate) fn io(path: &camino::Utf8Path, err: std::io::Error) -> Self {
        FixError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

pub type FixResult<T> = Result<T, FixError>;

#[cfg(test)]
mod tests {
    use super::FixError;

    #[test]
    fn display_names_the_file() {
        let err = FixError::Format {
            path: "packages/a/README.md".into(),
        };
        assert_eq!(err.to_string(), "cannot fix non-JSON file packages/a/README.md");
    }
}
