//! Fuzz target for redaction rule parsing.
//!
//! Tests that JSON rule parsing and compilation handle arbitrary input
//! without panicking; malformed rules may only return an error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pd_redact::{FieldRedactor, RedactionRule};

fuzz_target!(|data: &[u8]| {
    if let Ok(rule) = serde_json::from_slice::<RedactionRule>(data) {
        // Whatever parsed must either compile or fail cleanly.
        let _ = FieldRedactor::new(rule);
    }
});
