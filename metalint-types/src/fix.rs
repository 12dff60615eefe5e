use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// A machine-applicable patch attached to a diagnostic.
///
/// The set of variants is closed; `metalint-edit` matches on it exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Fix {
    /// Overwrite the whole file.
    ReplaceFile { path: Utf8PathBuf, content: String },

    /// Replace one (possibly nested) attribute of a JSON document.
    ///
    /// `attribute` is the key path from the document root. A `None` value
    /// removes the innermost key.
    ReplaceJsonAttribute {
        path: Utf8PathBuf,
        attribute: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<serde_json::Value>,
    },
}

impl Fix {
    /// Convenience constructor for the common single-key case.
    pub fn json_attribute(
        path: impl Into<Utf8PathBuf>,
        attribute: &str,
        value: Option<serde_json::Value>,
    ) -> Self {
        Fix::ReplaceJsonAttribute {
            path: path.into(),
            attribute: vec![attribute.to_string()],
            value,
        }
    }

    pub fn path(&self) -> &Utf8Path {
        match self {
            Fix::ReplaceFile { path, .. } => path,
            Fix::ReplaceJsonAttribute { path, .. } => path,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Fix::ReplaceFile { .. } => "replace-file",
            Fix::ReplaceJsonAttribute { .. } => "replace-json-attribute",
        }
    }
}
