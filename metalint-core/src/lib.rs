//! Embeddable core library for metalint.
//!
//! Provides a clap-free entry point with all process-global state (working
//! directory, stdout, file writes, git) passed in explicitly.
//!
//! # Port traits
//!
//! - [`OutputPort`](ports::OutputPort) - receives the printed lines
//! - [`FixPort`](ports::FixPort) - applies fixes
//! - [`RemotePort`] - resolves the git remote
//!
//! The [`adapters`] module provides the stdout and filesystem implementations
//! plus in-memory ones for tests.
//!
//! # Entry point
//!
//! - [`run_lint`](pipeline::run_lint) - load, check, print, fix, count

pub mod adapters;
pub mod license;
pub mod pipeline;
pub mod ports;
pub mod settings;

pub use metalint_project::{RemotePort, ShellGitPort, StaticRemote};
pub use pipeline::{run_lint, LintOutcome, ToolError};
pub use settings::{LintSettings, RunMode};
