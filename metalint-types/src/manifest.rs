use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The dependency buckets of a package manifest, in visiting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyScope {
    Dependencies,
    DevDependencies,
    PeerDependencies,
}

impl DependencyScope {
    pub const ALL: [DependencyScope; 3] = [
        DependencyScope::Dependencies,
        DependencyScope::DevDependencies,
        DependencyScope::PeerDependencies,
    ];

    /// Manifest key of the bucket.
    pub fn key(self) -> &'static str {
        match self {
            DependencyScope::Dependencies => "dependencies",
            DependencyScope::DevDependencies => "devDependencies",
            DependencyScope::PeerDependencies => "peerDependencies",
        }
    }
}

/// A parsed `package.json`.
///
/// Kept as an ordered JSON object rather than a typed struct: rules compare
/// serialized attribute values and report keys in declared order, and unknown
/// attributes must round-trip untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest(Map<String, Value>);

impl Manifest {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Returns `None` when the document is not a JSON object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.0.get(attribute)
    }

    pub fn contains(&self, attribute: &str) -> bool {
        self.0.contains_key(attribute)
    }

    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    pub fn version(&self) -> Option<&str> {
        self.get("version").and_then(Value::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Serialized form of an attribute, used for structural equality.
    pub fn serialized(&self, attribute: &str) -> Option<String> {
        self.get(attribute).map(Value::to_string)
    }

    /// Entries of one dependency bucket in declared order.
    ///
    /// Non-string version ranges are yielded as their JSON text.
    pub fn dependencies(&self, scope: DependencyScope) -> impl Iterator<Item = (&str, String)> {
        self.get(scope.key())
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|deps| deps.iter())
            .map(|(name, version)| {
                let version = match version {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (name.as_str(), version)
            })
    }

    /// Workspace globs declared by the manifest.
    ///
    /// Accepts both the array form and the `{ "packages": [...] }` form.
    pub fn workspace_patterns(&self) -> Vec<String> {
        let patterns = match self.get("workspaces") {
            Some(Value::Array(items)) => Some(items),
            Some(Value::Object(obj)) => obj.get("packages").and_then(Value::as_array),
            _ => None,
        };
        patterns
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    }
}
