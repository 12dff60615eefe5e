//! Default port implementations.

use crate::ports::{FixPort, OutputPort};
use anyhow::Context;
use metalint_edit::FixError;
use metalint_types::Fix;
use std::io::Write;
use std::sync::Mutex;

/// Writes lines to the process stdout.
#[derive(Debug, Clone, Default)]
pub struct StdoutOutput;

impl OutputPort for StdoutOutput {
    fn line(&mut self, line: &str) -> anyhow::Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{line}").context("write to stdout")
    }
}

/// Collects lines in memory.
#[derive(Debug, Clone, Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

impl OutputPort for BufferOutput {
    fn line(&mut self, line: &str) -> anyhow::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

/// Applies fixes to the filesystem via `metalint_edit::apply_fix`.
#[derive(Debug, Clone, Default)]
pub struct FsFixPort;

impl FixPort for FsFixPort {
    fn apply(&self, fix: &Fix) -> Result<(), FixError> {
        metalint_edit::apply_fix(fix)
    }
}

/// Records fixes without touching the filesystem.
#[derive(Debug, Default)]
pub struct RecordingFixPort {
    applied: Mutex<Vec<Fix>>,
}

impl RecordingFixPort {
    pub fn applied(&self) -> Vec<Fix> {
        match self.applied.lock() {
            Ok(applied) => applied.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl FixPort for RecordingFixPort {
    fn apply(&self, fix: &Fix) -> Result<(), FixError> {
        match self.applied.lock() {
            Ok(mut applied) => applied.push(fix.clone()),
            Err(poisoned) => poisoned.into_inner().push(fix.clone()),
        }
        Ok(())
    }
}
