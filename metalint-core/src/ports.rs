//! Port traits abstracting I/O away from the pipeline.

use metalint_edit::FixError;
use metalint_types::Fix;

/// Line-oriented diagnostic stream.
pub trait OutputPort {
    fn line(&mut self, line: &str) -> anyhow::Result<()>;
}

/// Applies a fix to persistent state.
pub trait FixPort {
    fn apply(&self, fix: &Fix) -> Result<(), FixError>;
}
