//! Version-control remote lookup.
//!
//! Only the `origin` remote is consulted, and only GitHub, GitLab and
//! Bitbucket URLs produce manifest metadata.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::process::Command;
use tracing::debug;

const KNOWN_HOSTS: &[&str] = &["github.com", "gitlab.com", "bitbucket.org"];

/// Manifest metadata derived from a hosted remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitRemote {
    /// `https://<host>/<owner>/<repo>#readme`
    pub homepage: String,
    /// `https://<host>/<owner>/<repo>/issues`
    pub bugs_url: String,
    /// `git+https://<host>/<owner>/<repo>.git`
    pub repository: String,
}

/// Source of the `origin` remote URL.
pub trait RemotePort: Sync {
    fn origin_url(&self, project_root: &Utf8Path) -> anyhow::Result<Option<String>>;
}

/// Asks the `git` binary.
#[derive(Debug, Clone, Default)]
pub struct ShellGitPort;

impl RemotePort for ShellGitPort {
    fn origin_url(&self, project_root: &Utf8Path) -> anyhow::Result<Option<String>> {
        let output = match Command::new("git")
            .args(["config", "--get", "remote.origin.url"])
            .current_dir(project_root)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                debug!(error = %e, "git not available");
                return Ok(None);
            }
        };

        if !output.status.success() {
            return Ok(None);
        }

        let url = String::from_utf8(output.stdout)?.trim().to_string();
        Ok((!url.is_empty()).then_some(url))
    }
}

/// Fixed answer, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticRemote(pub Option<String>);

impl RemotePort for StaticRemote {
    fn origin_url(&self, _project_root: &Utf8Path) -> anyhow::Result<Option<String>> {
        Ok(self.0.clone())
    }
}

/// Resolve the project's remote metadata, swallowing lookup failures.
pub fn lookup_remote(port: &dyn RemotePort, project_root: &Utf8Path) -> Option<GitRemote> {
    match port.origin_url(project_root) {
        Ok(Some(url)) => {
            let remote = parse_remote(&url);
            if remote.is_none() {
                debug!(%url, "remote is not on a known host");
            }
            remote
        }
        Ok(None) => None,
        Err(e) => {
            debug!(error = %e, "remote lookup failed");
            None
        }
    }
}

/// Parse `https://`, `ssh://` and scp-like (`git@host:owner/repo`) URLs.
pub fn parse_remote(url: &str) -> Option<GitRemote> {
    let url = url.trim();
    let rest = url.strip_prefix("git+").unwrap_or(url);

    let (host, path) = if let Some((_, after)) = rest.split_once("://") {
        let after = after.rsplit_once('@').map_or(after, |(_, host)| host);
        after.split_once('/')?
    } else {
        let after = rest.split_once('@').map_or(rest, |(_, host)| host);
        after.split_once(':')?
    };

    let host = host.split(':').next()?.to_ascii_lowercase();
    if !KNOWN_HOSTS.contains(&host.as_str()) {
        return None;
    }

    let path = path.trim_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    let mut segments = path.split('/');
    let (owner, repo) = (segments.next()?, segments.next()?);
    if owner.is_empty() || repo.is_empty() || segments.next().is_some() {
        return None;
    }

    let base = format!("https://{host}/{owner}/{repo}");
    Some(GitRemote {
        homepage: format!("{base}#readme"),
        bugs_url: format!("{base}/issues"),
        repository: format!("git+{base}.git"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expected(host: &str) -> GitRemote {
        GitRemote {
            homepage: format!("https://{host}/acme/widgets#readme"),
            bugs_url: format!("https://{host}/acme/widgets/issues"),
            repository: format!("git+https://{host}/acme/widgets.git"),
        }
    }

    #[test]
    fn parses_common_url_forms() {
        for url in [
            "https://github.com/acme/widgets.git",
            "https://github.com/acme/widgets",
            "git+https://github.com/acme/widgets.git",
            "ssh://git@github.com/acme/widgets.git",
            "ssh://git@github.com:22/acme/widgets.git",
            "git@github.com:acme/widgets.git",
            "https://user@github.com/acme/widgets/",
        ] {
            assert_eq!(parse_remote(url), Some(expected("github.com")), "{url}");
        }
    }

    #[test]
    fn other_hosts() {
        assert_eq!(
            parse_remote("git@gitlab.com:acme/widgets.git"),
            Some(expected("gitlab.com"))
        );
        assert_eq!(
            parse_remote("https://bitbucket.org/acme/widgets"),
            Some(expected("bitbucket.org"))
        );
    }

    #[test]
    fn unknown_hosts_and_shapes_are_ignored() {
        assert_eq!(parse_remote("https://git.example.com/acme/widgets.git"), None);
        assert_eq!(parse_remote("/srv/git/widgets.git"), None);
        assert_eq!(parse_remote("https://github.com/acme"), None);
        assert_eq!(parse_remote("https://github.com/acme/widgets/tree/main"), None);
    }

    #[test]
    fn lookup_uses_port() {
        let port = StaticRemote(Some("git@github.com:acme/widgets.git".to_string()));
        assert_eq!(
            lookup_remote(&port, Utf8Path::new(".")),
            Some(expected("github.com"))
        );
        assert_eq!(lookup_remote(&StaticRemote(None), Utf8Path::new(".")), None);
    }
}
