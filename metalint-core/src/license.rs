//! License header checks over the files selected by `license.include`.

use anyhow::Context;
use camino::Utf8Path;
use metalint_license::{check_license_file, classify_notice, is_license_file, LicenseTexts, NoticeVerdict};
use metalint_project::{globs, Project};
use metalint_types::{codes, Diagnostic, Fix};
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// Check every included file against the project's license texts.
///
/// Files are read and checked in parallel; diagnostics come back in glob
/// order. Nothing is written here.
pub fn check_licenses(project: &Project) -> anyhow::Result<Vec<Diagnostic>> {
    let Some(texts) = &project.license else {
        info!("no license information available, not checking");
        return Ok(Vec::new());
    };
    let Some(config) = &project.config.license else {
        return Ok(Vec::new());
    };
    let Some(include) = &config.include else {
        warn!("license information specified in config but \"include\" was not specified");
        return Ok(Vec::new());
    };

    let files = globs::expand_filtered(project.root(), include, &config.exclude)?;
    debug!(count = files.len(), "checking license headers");

    let checked: Vec<Option<Diagnostic>> = files
        .par_iter()
        .filter(|path| path.is_file())
        .map(|path| check_file(project.root(), path, texts))
        .collect::<anyhow::Result<_>>()?;

    Ok(checked.into_iter().flatten().collect())
}

fn check_file(
    root: &Utf8Path,
    path: &Utf8Path,
    texts: &LicenseTexts,
) -> anyhow::Result<Option<Diagnostic>> {
    let bytes = fs_err::read(path).with_context(|| format!("read license target {path}"))?;
    let shown = path.strip_prefix(root).unwrap_or(path);
    // Rewriting a lossy decode would corrupt the file.
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            warn!(file = %shown, error = %e, "skipping license check of non UTF-8 file");
            return Ok(None);
        }
    };

    if is_license_file(path) {
        return Ok(check_license_file(&content, texts.full()).map(|full| {
            Diagnostic::error(codes::LICENSE_FILE, format!("file {shown} is out-dated"))
                .with_fix(replace(path, full))
        }));
    }

    let diagnostic = match classify_notice(&content, texts.notice()) {
        NoticeVerdict::Current => None,
        NoticeVerdict::Missing(content) => Some(
            Diagnostic::error(codes::LICENSE_NOTICE, format!("no copyright notice in {shown}"))
                .with_fix(replace(path, content)),
        ),
        NoticeVerdict::Outdated(content) => Some(
            Diagnostic::error(codes::LICENSE_NOTICE, format!("header out-dated in {shown}"))
                .with_fix(replace(path, content)),
        ),
    };
    Ok(diagnostic)
}

fn replace(path: &Utf8Path, content: String) -> Fix {
    Fix::ReplaceFile {
        path: path.to_path_buf(),
        content,
    }
}
