use crate::error::LicenseError;
use crate::notice::{scan_header, Header};
use camino::Utf8Path;
use tracing::debug;

/// Rendered license texts for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseTexts {
    full: String,
    notice: String,
}

impl LicenseTexts {
    /// Both texts are trimmed. The notice must be exactly one `/*! ... */`
    /// block.
    pub fn new(full: impl Into<String>, notice: impl Into<String>) -> Result<Self, LicenseError> {
        let full = full.into().trim().to_string();
        let notice = notice.into().trim().to_string();

        match scan_header(&notice) {
            Header::Block { start: 0, end } if end == notice.len() => {}
            Header::Block { .. } => {
                return Err(LicenseError::InvalidNotice {
                    message: "text follows the closing */".to_string(),
                });
            }
            Header::Unterminated { .. } => {
                return Err(LicenseError::InvalidNotice {
                    message: "missing closing */".to_string(),
                });
            }
            Header::Absent => {
                return Err(LicenseError::InvalidNotice {
                    message: "must start with /*!".to_string(),
                });
            }
        }

        Ok(Self { full, notice })
    }

    /// Text expected in every `LICENSE` file.
    pub fn full(&self) -> &str {
        &self.full
    }

    /// Header expected at the top of every source file.
    pub fn notice(&self) -> &str {
        &self.notice
    }
}

struct Builtin {
    name: &'static str,
    full: &'static str,
    notice: &'static str,
}

const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "ISC",
        full: include_str!("../licenses/ISC/LICENSE.tmpl"),
        notice: include_str!("../licenses/ISC/notice.tmpl"),
    },
    Builtin {
        name: "MIT",
        full: include_str!("../licenses/MIT/LICENSE.tmpl"),
        notice: include_str!("../licenses/MIT/notice.tmpl"),
    },
];

/// Names of the licenses shipped with metalint.
pub fn builtin_licenses() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|b| b.name)
}

/// Substitute `{{ owner }}` and `{{ date }}` in `template`.
///
/// Whitespace inside the braces is optional. Any other placeholder is an error.
pub fn render_template(
    name: &str,
    template: &str,
    owner: &str,
    date: &str,
) -> Result<String, LicenseError> {
    let mut out = String::with_capacity(template.len() + owner.len() + date.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let close = after
            .find("}}")
            .ok_or_else(|| LicenseError::UnterminatedPlaceholder {
                template: name.to_string(),
            })?;

        match after[..close].trim() {
            "owner" => out.push_str(owner),
            "date" => out.push_str(date),
            other => {
                return Err(LicenseError::UnknownPlaceholder {
                    template: name.to_string(),
                    placeholder: other.to_string(),
                });
            }
        }
        rest = &after[close + 2..];
    }
    out.push_str(rest);

    Ok(out)
}

/// Load and render license `name`.
///
/// `<templates_dir>/<name>/LICENSE.tmpl` and `notice.tmpl` take precedence
/// over the built-in templates when both exist.
pub fn load_license(
    name: &str,
    owner: &str,
    date: &str,
    templates_dir: Option<&Utf8Path>,
) -> Result<LicenseTexts, LicenseError> {
    let (full, notice) = match templates_dir.and_then(|dir| read_custom(dir, name).transpose()) {
        Some(custom) => custom?,
        None => {
            let builtin = BUILTINS
                .iter()
                .find(|b| b.name == name)
                .ok_or_else(|| LicenseError::UnknownLicense {
                    name: name.to_string(),
                })?;
            (builtin.full.to_string(), builtin.notice.to_string())
        }
    };

    let full = render_template(&format!("{name}/LICENSE.tmpl"), &full, owner, date)?;
    let notice = render_template(&format!("{name}/notice.tmpl"), &notice, owner, date)?;
    LicenseTexts::new(full, notice)
}

fn read_custom(dir: &Utf8Path, name: &str) -> Result<Option<(String, String)>, LicenseError> {
    let base = dir.join(name);
    let full_path = base.join("LICENSE.tmpl");
    let notice_path = base.join("notice.tmpl");

    if !full_path.is_file() || !notice_path.is_file() {
        debug!(dir = %base, "no custom license templates");
        return Ok(None);
    }

    let read = |path: &Utf8Path| {
        fs_err::read_to_string(path).map_err(|e| LicenseError::Io {
            message: e.to_string(),
        })
    };
    debug!(dir = %base, "using custom license templates");
    Ok(Some((read(full_path.as_path())?, read(notice_path.as_path())?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn placeholders_accept_optional_whitespace() {
        let out = render_template("t", "{{owner}}/{{ date }}/{{  owner }}", "Acme", "2019").unwrap();
        assert_eq!(out, "Acme/2019/Acme");
    }

    #[test]
    fn unknown_placeholder_is_rejected() {
        let err = render_template("t", "{{ year }}", "Acme", "2019").unwrap_err();
        assert!(matches!(
            err,
            LicenseError::UnknownPlaceholder { ref placeholder, .. } if placeholder == "year"
        ));
    }

    #[test]
    fn unterminated_placeholder_is_rejected() {
        let err = render_template("t", "text {{ owner", "Acme", "2019").unwrap_err();
        assert!(matches!(err, LicenseError::UnterminatedPlaceholder { .. }));
    }

    #[test]
    fn builtin_mit_renders() {
        let texts = load_license("MIT", "Acme Inc.", "2017-2019", None).unwrap();
        assert!(texts.full().starts_with("MIT License"));
        assert!(texts.full().contains("Copyright (c) 2017-2019 Acme Inc."));
        assert!(texts.notice().starts_with("/*!"));
        assert!(texts.notice().ends_with("*/"));
        assert!(texts.notice().contains("Acme Inc."));
    }

    #[test]
    fn builtins_are_listed() {
        let names: Vec<_> = builtin_licenses().collect();
        assert_eq!(names, vec!["ISC", "MIT"]);
        for name in names {
            load_license(name, "o", "d", None).unwrap();
        }
    }

    #[test]
    fn unknown_license_is_an_error() {
        let err = load_license("WTFPL", "o", "d", None).unwrap_err();
        assert_eq!(err.to_string(), "license unknown: WTFPL");
    }

    #[test]
    fn notice_must_be_a_single_block() {
        assert!(LicenseTexts::new("full", "/*! ok */").is_ok());
        assert!(LicenseTexts::new("full", "  /*! ok */\n").is_ok());
        assert!(matches!(
            LicenseTexts::new("full", "// nope"),
            Err(LicenseError::InvalidNotice { .. })
        ));
        assert!(matches!(
            LicenseTexts::new("full", "/*! a */ trailing"),
            Err(LicenseError::InvalidNotice { .. })
        ));
        assert!(matches!(
            LicenseTexts::new("full", "/*! open"),
            Err(LicenseError::InvalidNotice { .. })
        ));
    }
}
