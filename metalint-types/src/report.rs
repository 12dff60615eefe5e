use crate::diagnostic::{Diagnostic, Severity};
use serde::{Deserialize, Serialize};

/// Counters for one lint run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub errors: u64,
    pub warnings: u64,
    pub fixes_applied: u64,
}

impl RunSummary {
    pub fn record(&mut self, diagnostic: &Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
        }
    }

    pub fn diagnostics(&self) -> u64 {
        self.errors + self.warnings
    }

    /// Process exit status: `0` when nothing was reported, `1` otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.diagnostics() == 0 { 0 } else { 1 }
    }
}
