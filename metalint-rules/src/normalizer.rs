//! Canonical form of a `package.json`, in the spirit of npm's
//! `normalize-package-data` run in strict mode.
//!
//! Only attributes already present are rewritten in place; derived attributes
//! are appended. Callers compare attribute by attribute, so appended keys do
//! not produce diffs.

use metalint_project::parse_remote;
use serde_json::{json, Map, Value};
use thiserror::Error;

/// The manifest cannot be normalized at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("name field must be a string.")]
    NameNotString,

    #[error("Invalid name: {name:?}")]
    InvalidName { name: String },

    #[error("Invalid version: {version:?}")]
    InvalidVersion { version: String },
}

/// Normalized copy plus the warnings raised on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub manifest: Map<String, Value>,
    pub warnings: Vec<String>,
}

const DEPENDENCY_FIELDS: &[&str] = &[
    "dependencies",
    "devDependencies",
    "optionalDependencies",
    "peerDependencies",
];

const TYPOS: &[(&str, &str)] = &[
    ("dependancies", "dependencies"),
    ("dependecies", "dependencies"),
    ("depdenencies", "dependencies"),
    ("devEependencies", "devDependencies"),
    ("depends", "dependencies"),
    ("dev-dependencies", "devDependencies"),
    ("devDependences", "devDependencies"),
    ("devDepenencies", "devDependencies"),
    ("devdependencies", "devDependencies"),
    ("repostitory", "repository"),
    ("repo", "repository"),
    ("prefereGlobal", "preferGlobal"),
    ("hompage", "homepage"),
    ("hampage", "homepage"),
    ("autohr", "author"),
    ("autor", "author"),
    ("contributers", "contributors"),
    ("publicationConfig", "publishConfig"),
    ("script", "scripts"),
];

struct Normalizer {
    data: Map<String, Value>,
    warnings: Vec<String>,
}

/// Normalize a manifest.
pub fn normalize(manifest: &Map<String, Value>) -> Result<Normalized, NormalizeError> {
    let mut n = Normalizer {
        data: manifest.clone(),
        warnings: Vec::new(),
    };

    n.typos();
    n.name()?;
    n.version()?;
    n.description();
    n.repository();
    n.files();
    n.bin();
    n.man();
    n.keywords();
    n.scripts();
    n.bugs();
    n.homepage();
    n.dependencies();
    n.people();
    n.readme();
    n.license();

    Ok(Normalized {
        manifest: n.data,
        warnings: n.warnings,
    })
}

impl Normalizer {
    fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    fn typos(&mut self) {
        for (typo, fixed) in TYPOS {
            if self.data.contains_key(*typo) {
                self.warn(format!("{typo} should probably be {fixed}."));
            }
        }
        if let Some(Value::Object(bugs)) = self.data.get("bugs") {
            let hits: Vec<String> = ["web", "name"]
                .into_iter()
                .filter(|k| bugs.contains_key(*k))
                .map(|k| format!("bugs['{k}'] should probably be bugs['url']."))
                .collect();
            self.warnings.extend(hits);
        }
    }

    fn name(&mut self) -> Result<(), NormalizeError> {
        let Some(Value::String(name)) = self.data.get("name") else {
            return Err(NormalizeError::NameNotString);
        };
        if !is_valid_name(name) {
            return Err(NormalizeError::InvalidName { name: name.clone() });
        }
        Ok(())
    }

    fn version(&mut self) -> Result<(), NormalizeError> {
        let version = match self.data.get("version").cloned() {
            None | Some(Value::Null) => {
                self.data.insert("version".to_string(), json!(""));
                return Ok(());
            }
            Some(Value::String(v)) if v.is_empty() => return Ok(()),
            Some(Value::String(v)) => v,
            Some(other) => {
                return Err(NormalizeError::InvalidVersion {
                    version: other.to_string(),
                });
            }
        };

        let cleaned = clean_version(&version)
            .ok_or_else(|| NormalizeError::InvalidVersion { version })?;
        self.data.insert("version".to_string(), json!(cleaned));
        Ok(())
    }

    fn description(&mut self) {
        match self.data.get("description") {
            None => self.warn("No description"),
            Some(Value::String(_)) => {}
            Some(_) => {
                self.warn("'description' field should be a string");
                self.data.remove("description");
            }
        }
    }

    fn repository(&mut self) {
        if let Some(repos) = self.data.get("repositories").cloned() {
            if !self.data.contains_key("repository") {
                self.warn("'repositories' (plural) Not supported. Please pick one as the 'repository' field");
                if let Some(first) = repos.as_array().and_then(|r| r.first()) {
                    self.data.insert("repository".to_string(), first.clone());
                }
            }
        }

        let Some(repo) = self.data.get("repository").cloned() else {
            self.warn("No repository field.");
            return;
        };

        let mut repo = match repo {
            Value::String(url) => json!({ "type": "git", "url": url }),
            other => other,
        };

        if let Some(url) = repo.get("url").and_then(Value::as_str) {
            if let Some(remote) = parse_remote(&shortcut_to_url(url)) {
                repo["url"] = json!(remote.repository);
            }
        }
        self.data.insert("repository".to_string(), repo);
    }

    fn files(&mut self) {
        match self.data.get("files") {
            None => {}
            Some(Value::Array(items)) => {
                let kept: Vec<Value> = items
                    .iter()
                    .filter(|item| item.as_str().is_some_and(|s| !s.is_empty()))
                    .cloned()
                    .collect();
                for bad in items.iter().filter(|item| !kept.contains(item)) {
                    self.warnings
                        .push(format!("Invalid filename in 'files' list: {bad}"));
                }
                self.data.insert("files".to_string(), Value::Array(kept));
            }
            Some(_) => {
                self.warn("Invalid 'files' member");
                self.data.remove("files");
            }
        }
    }

    fn bin(&mut self) {
        if let Some(Value::String(bin)) = self.data.get("bin") {
            let Some(Value::String(name)) = self.data.get("name") else {
                return;
            };
            let short = name.rsplit('/').next().unwrap_or(name).to_string();
            let mut map = Map::new();
            map.insert(short, Value::String(bin.clone()));
            self.data.insert("bin".to_string(), Value::Object(map));
        }
    }

    fn man(&mut self) {
        if let Some(Value::String(man)) = self.data.get("man") {
            let man = json!([man]);
            self.data.insert("man".to_string(), man);
        }
    }

    fn keywords(&mut self) {
        match self.data.get("keywords") {
            None | Some(Value::Array(_)) => {}
            Some(Value::String(s)) => {
                let parts: Vec<Value> = s
                    .split(',')
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(|p| json!(p))
                    .collect();
                self.data.insert("keywords".to_string(), Value::Array(parts));
            }
            Some(_) => {
                self.warn("keywords should be an array of strings");
                self.data.remove("keywords");
            }
        }
        if let Some(Value::Array(items)) = self.data.get("keywords") {
            if items.iter().any(|k| !k.is_string()) {
                let kept: Vec<Value> = items.iter().filter(|k| k.is_string()).cloned().collect();
                self.warn("keywords should be an array of strings");
                self.data.insert("keywords".to_string(), Value::Array(kept));
            }
        }
    }

    fn scripts(&mut self) {
        match self.data.get("scripts") {
            None => {}
            Some(Value::Object(scripts)) => {
                if scripts.values().any(|v| !v.is_string()) {
                    let kept: Map<String, Value> = scripts
                        .iter()
                        .filter(|(_, v)| v.is_string())
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect();
                    self.warn("script values must be string commands");
                    self.data.insert("scripts".to_string(), Value::Object(kept));
                }
            }
            Some(_) => {
                self.warn("scripts must be an object");
                self.data.remove("scripts");
            }
        }
    }

    fn bugs(&mut self) {
        let Some(bugs) = self.data.get("bugs").cloned() else {
            return;
        };

        let mut out = Map::new();
        match bugs {
            Value::String(s) if is_email(&s) => {
                out.insert("email".to_string(), json!(s));
            }
            Value::String(s) if is_url(&s) => {
                out.insert("url".to_string(), json!(s));
            }
            Value::String(_) => {
                self.warn("Bug string field must be url, email, or {email,url}");
            }
            Value::Object(old) => {
                let url = old.get("url").or_else(|| old.get("web"));
                match url {
                    Some(Value::String(u)) if is_url(u) => {
                        out.insert("url".to_string(), json!(u));
                    }
                    Some(_) => self.warn("bugs.url field must be a string url. Deleted."),
                    None => {}
                }
                match old.get("email") {
                    Some(Value::String(e)) if is_email(e) => {
                        out.insert("email".to_string(), json!(e));
                    }
                    Some(_) => self.warn("bugs.email field must be a string email. Deleted."),
                    None => {}
                }
            }
            _ => self.warn("Bug string field must be url, email, or {email,url}"),
        }

        if out.is_empty() {
            self.warn("Normalized value of bugs field is an empty object. Deleted.");
            self.data.remove("bugs");
        } else {
            self.data.insert("bugs".to_string(), Value::Object(out));
        }
    }

    fn homepage(&mut self) {
        match self.data.get("homepage") {
            None => {}
            Some(Value::String(url)) => {
                if !is_url(url) {
                    let url = format!("http://{url}");
                    self.data.insert("homepage".to_string(), json!(url));
                }
            }
            Some(_) => {
                self.warn("homepage field must be a string url. Deleted.");
                self.data.remove("homepage");
            }
        }
    }

    fn dependencies(&mut self) {
        for field in DEPENDENCY_FIELDS {
            let Some(deps) = self.data.get(*field).cloned() else {
                continue;
            };

            let deps = match deps {
                Value::Object(map) => map,
                Value::Array(items) => {
                    self.warn(format!("specifying {field} as array is deprecated"));
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(split_array_dependency)
                        .collect()
                }
                _ => {
                    self.warn(format!("{field} field must be an object"));
                    self.data.remove(*field);
                    continue;
                }
            };

            let mut kept = Map::new();
            for (name, version) in deps {
                if version.is_string() {
                    kept.insert(name, version);
                } else {
                    self.warn(format!("Invalid dependency: {name} {version}"));
                }
            }
            self.data.insert(field.to_string(), Value::Object(kept));
        }
    }

    fn people(&mut self) {
        if let Some(author) = self.data.get("author").cloned() {
            if !author.is_null() {
                self.data.insert("author".to_string(), canonical_person(&author));
            }
        }
        for field in ["contributors", "maintainers"] {
            if let Some(Value::Array(people)) = self.data.get(field) {
                let people: Vec<Value> = people.iter().map(canonical_person).collect();
                self.data.insert(field.to_string(), Value::Array(people));
            }
        }
    }

    fn readme(&mut self) {
        if !self.data.contains_key("readme") {
            self.warn("No README data");
            self.data
                .insert("readme".to_string(), json!("ERROR: No README data found!"));
        }
    }

    fn license(&mut self) {
        match self.data.get("license") {
            None => self.warn("No license field."),
            Some(Value::String(s)) if !s.trim().is_empty() => {}
            Some(_) => self.warn("license should be a valid SPDX license expression"),
        }
    }
}

/// Strict semver after trimming whitespace and a leading `=` or `v`.
pub fn clean_version(version: &str) -> Option<String> {
    let trimmed = version.trim().trim_start_matches(['=', 'v']);
    semver::Version::parse(trimmed).ok().map(|v| v.to_string())
}

fn is_valid_name(name: &str) -> bool {
    if name.is_empty()
        || name.len() > 214
        || name.trim() != name
        || name.starts_with('.')
        || name.starts_with('_')
        || name != name.to_lowercase()
    {
        return false;
    }
    if matches!(name, "node_modules" | "favicon.ico") {
        return false;
    }

    let body = match name.strip_prefix('@') {
        Some(scoped) => match scoped.split_once('/') {
            Some((scope, pkg)) if !scope.is_empty() && !pkg.is_empty() => {
                return is_url_safe(scope) && is_url_safe(pkg);
            }
            _ => return false,
        },
        None => name,
    };
    is_url_safe(body)
}

fn is_url_safe(s: &str) -> bool {
    s.bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~' | b'!' | b'*' | b'\'' | b'(' | b')'))
}

fn is_email(s: &str) -> bool {
    !s.contains("://")
        && s.split_once('@')
            .is_some_and(|(user, host)| !user.is_empty() && host.contains('.'))
}

fn is_url(s: &str) -> bool {
    s.split_once("://")
        .is_some_and(|(scheme, rest)| !scheme.is_empty() && !rest.is_empty())
}

/// `user/repo` and `github:user/repo` shortcuts expand to GitHub URLs.
fn shortcut_to_url(url: &str) -> String {
    if let Some(path) = url.strip_prefix("github:") {
        return format!("https://github.com/{path}");
    }
    if let Some(path) = url.strip_prefix("gitlab:") {
        return format!("https://gitlab.com/{path}");
    }
    if let Some(path) = url.strip_prefix("bitbucket:") {
        return format!("https://bitbucket.org/{path}");
    }
    let is_shortcut = !url.contains(':')
        && !url.starts_with('/')
        && !url.starts_with('.')
        && url.matches('/').count() == 1;
    if is_shortcut {
        return format!("https://github.com/{url}");
    }
    url.to_string()
}

/// `"name@range"` or `"name >=1"` from the deprecated array form.
fn split_array_dependency(entry: &str) -> (String, Value) {
    let entry = entry.trim();
    let split = entry
        .char_indices()
        .skip(1)
        .find(|(_, c)| matches!(c, '@' | ' ' | '>' | '<' | '='))
        .map(|(i, _)| i);
    match split {
        Some(i) => {
            let (name, range) = entry.split_at(i);
            let range = range.trim_start_matches('@').trim();
            (name.to_string(), json!(range))
        }
        None => (entry.to_string(), json!("")),
    }
}

/// People become `{name, email, url}` objects with only the known keys.
fn canonical_person(person: &Value) -> Value {
    let text = match person {
        Value::String(s) => s.clone(),
        Value::Object(obj) => {
            let field = |keys: &[&str]| {
                keys.iter()
                    .find_map(|k| obj.get(*k).and_then(Value::as_str))
                    .filter(|s| !s.is_empty())
            };
            let mut text = field(&["name"]).unwrap_or_default().to_string();
            if let Some(email) = field(&["email", "mail"]) {
                text.push_str(&format!(" <{email}>"));
            }
            if let Some(url) = field(&["url", "web"]) {
                text.push_str(&format!(" ({url})"));
            }
            text
        }
        other => return other.clone(),
    };
    parse_person(&text)
}

fn parse_person(text: &str) -> Value {
    let mut out = Map::new();

    let name_end = text.find(['(', '<']).unwrap_or(text.len());
    let name = text[..name_end].trim();
    if !name.is_empty() {
        out.insert("name".to_string(), json!(name));
    }
    if let Some(email) = between(text, '<', '>') {
        out.insert("email".to_string(), json!(email));
    }
    if let Some(url) = between(text, '(', ')') {
        out.insert("url".to_string(), json!(url));
    }
    Value::Object(out)
}

fn between(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)? + open.len_utf8();
    let len = text[start..].find(close)?;
    (len > 0).then(|| &text[start..start + len])
}
