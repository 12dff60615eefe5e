//! Clap-free settings for the lint pipeline.

use camino::Utf8PathBuf;

/// Whether fixes are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Apply every fix as soon as its diagnostic is printed.
    #[default]
    Fix,
    /// Report only; prints a notice line first.
    Ci,
}

/// Settings for [`crate::run_lint`].
#[derive(Debug, Clone)]
pub struct LintSettings {
    /// Directory the project root is searched from.
    pub cwd: Utf8PathBuf,
    pub mode: RunMode,
}

impl Default for LintSettings {
    fn default() -> Self {
        Self {
            cwd: Utf8PathBuf::from("."),
            mode: RunMode::default(),
        }
    }
}
