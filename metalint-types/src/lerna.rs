use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A parsed `lerna.json`.
///
/// Like [`crate::Manifest`] this stays an ordered map so unknown keys can be
/// reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LernaConfig(Map<String, Value>);

impl LernaConfig {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// The `version` key as written. Non-string values are rendered as JSON
    /// (`1`, `null`); `None` only when the key is absent.
    pub fn version(&self) -> Option<String> {
        self.get("version").map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    pub fn npm_client(&self) -> Option<&str> {
        self.get("npmClient").and_then(Value::as_str)
    }

    pub fn use_workspaces(&self) -> bool {
        self.get("useWorkspaces").and_then(Value::as_bool) == Some(true)
    }

    /// Package globs from the `packages` section.
    pub fn packages(&self) -> Vec<String> {
        self.get("packages")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accessors_read_known_keys() {
        let l = LernaConfig::from_value(json!({
            "version": "3.1.0",
            "npmClient": "yarn",
            "useWorkspaces": true,
            "packages": ["packages/*"]
        }))
        .unwrap();
        assert_eq!(l.version().as_deref(), Some("3.1.0"));
        assert_eq!(l.npm_client(), Some("yarn"));
        assert!(l.use_workspaces());
        assert_eq!(l.packages(), vec!["packages/*"]);
    }

    #[test]
    fn non_string_version_is_rendered_as_json() {
        let l = LernaConfig::from_value(json!({ "version": 1 })).unwrap();
        assert_eq!(l.version().as_deref(), Some("1"));
        let l = LernaConfig::from_value(json!({ "version": null })).unwrap();
        assert_eq!(l.version().as_deref(), Some("null"));
        let l = LernaConfig::from_value(json!({})).unwrap();
        assert_eq!(l.version(), None);
    }

    #[test]
    fn use_workspaces_requires_literal_true() {
        let l = LernaConfig::from_value(json!({ "useWorkspaces": "true" })).unwrap();
        assert!(!l.use_workspaces());
    }
}
