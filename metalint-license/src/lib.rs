//! License header handling for metalint.
//!
//! Two independent pieces live here:
//! - the notice state machine ([`check_notice`], [`check_license_file`]), which
//!   decides whether a file's leading `/*! ... */` block is current and produces
//!   the corrected text when it is not;
//! - license template rendering ([`load_license`]), producing the `full` text
//!   written to `LICENSE` files and the `notice` expected in source headers.
//!
//! Nothing in this crate writes files; callers turn replacements into fixes.

mod error;
mod notice;
mod template;

pub use error::LicenseError;
pub use notice::{
    check_license_file, check_notice, classify_notice, is_license_file, scan_header, Header,
    NoticeVerdict,
};
pub use template::{builtin_licenses, load_license, render_template, LicenseTexts};
