//! BDD harness (cucumber-rs).
//!
//! This crate exists to keep scenario tests isolated from the production
//! crates. Scenarios drive `metalint_core::run_lint` in-process against
//! throwaway monorepos; the step definitions live in `tests/cucumber.rs` and
//! the scenarios in `features/`.
