#![no_main]

//! Fuzz target for the license notice state machine.
//!
//! Any file content must be fixed in one pass: checking the replacement
//! again yields no further change.

use libfuzzer_sys::fuzz_target;
use metalint_license::{check_notice, scan_header, Header, LicenseTexts};

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    content: String,
    notice_body: String,
}

fuzz_target!(|input: FuzzInput| {
    let _ = scan_header(&input.content);

    // Bodies containing a closer would not make a single block.
    let Ok(texts) = LicenseTexts::new("full", format!("/*! {} */", input.notice_body)) else {
        return;
    };
    let notice = texts.notice();

    let Some(fixed) = check_notice(&input.content, notice) else {
        return;
    };
    assert!(matches!(scan_header(&fixed), Header::Block { start: 0, .. }));
    assert_eq!(check_notice(&fixed, notice), None, "fix is not stable");
});
