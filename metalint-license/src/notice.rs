use camino::Utf8Path;

const OPENER: &[u8] = b"/*!";
const CLOSER: &[u8] = b"*/";

/// What sits at the top of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    /// The first significant bytes are not `/*!`.
    Absent,
    /// `/*!` with no `*/` before end of file.
    Unterminated { start: usize },
    /// `/*! ... */` occupying `start..end`; `end` is just past the closer.
    Block { start: usize, end: usize },
}

/// Locate the leading notice block.
///
/// Bytes with a value up to and including 20 (tab, line feed, carriage return
/// and other control bytes) are skipped first; a space is significant, so
/// ` /*!` reads as no header. The closer search is a plain byte scan: it does
/// not understand nested comments or string literals.
pub fn scan_header(content: &str) -> Header {
    let bytes = content.as_bytes();
    let start = bytes
        .iter()
        .position(|b| *b > 20)
        .unwrap_or(bytes.len());

    if !bytes[start..].starts_with(OPENER) {
        return Header::Absent;
    }

    let body = start + OPENER.len();
    match bytes[body..].windows(CLOSER.len()).position(|w| w == CLOSER) {
        Some(offset) => Header::Block {
            start,
            end: body + offset + CLOSER.len(),
        },
        None => Header::Unterminated { start },
    }
}

/// Outcome of checking a source file against the expected notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeVerdict {
    Current,
    /// No notice block; the replacement prepends one.
    Missing(String),
    /// A notice block exists but differs from the expected one.
    Outdated(String),
}

impl NoticeVerdict {
    pub fn is_current(&self) -> bool {
        matches!(self, NoticeVerdict::Current)
    }

    pub fn into_replacement(self) -> Option<String> {
        match self {
            NoticeVerdict::Current => None,
            NoticeVerdict::Missing(text) | NoticeVerdict::Outdated(text) => Some(text),
        }
    }
}

pub fn classify_notice(content: &str, notice: &str) -> NoticeVerdict {
    match scan_header(content) {
        Header::Absent => NoticeVerdict::Missing(with_body(notice, content.trim())),
        Header::Unterminated { .. } => {
            // The whole file is the header.
            if content.trim() == notice {
                NoticeVerdict::Current
            } else {
                NoticeVerdict::Outdated(with_body(notice, ""))
            }
        }
        Header::Block { start, end } => {
            if content[start..end].trim() == notice {
                NoticeVerdict::Current
            } else {
                let rest = strip_leading_blank_lines(&content[end..]).trim_end();
                NoticeVerdict::Outdated(with_body(notice, rest))
            }
        }
    }
}

/// Replacement text for a source file, or `None` when its notice is current.
///
/// Running this on its own output always returns `None`, provided `notice` is
/// a single `/*! ... */` block (see [`crate::LicenseTexts::new`]).
pub fn check_notice(content: &str, notice: &str) -> Option<String> {
    classify_notice(content, notice).into_replacement()
}

/// `LICENSE` files are compared whole; the replacement is `full` verbatim.
pub fn check_license_file(content: &str, full: &str) -> Option<String> {
    if content.trim() != full.trim() {
        Some(full.to_string())
    } else {
        None
    }
}

pub fn is_license_file(path: &Utf8Path) -> bool {
    path.file_name() == Some("LICENSE")
}

fn with_body(notice: &str, body: &str) -> String {
    if body.is_empty() {
        format!("{notice}\n")
    } else {
        format!("{notice}\n\n{body}\n")
    }
}

fn strip_leading_blank_lines(s: &str) -> &str {
    let mut rest = s;
    while let Some(idx) = rest.find('\n') {
        if !rest[..idx].trim().is_empty() {
            break;
        }
        rest = &rest[idx + 1..];
    }
    rest
}
