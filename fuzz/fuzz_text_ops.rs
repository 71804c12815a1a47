//! Fuzz target for the text operations.
//!
//! Run with: cargo +nightly fuzz run fuzz_text_ops
//!
//! Injection, scoring and the compliance check must not panic on any UTF-8
//! input, and injection must never drop input bytes.

#![no_main]

use buzzkit_core::LexiconEngine;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let mut engine = LexiconEngine::with_seed(data.len() as u64);

    let injected = engine.inject_buzzwords(text);
    assert!(injected.len() >= text.len());

    let score = engine.score_density(text);
    assert!(score >= 0.0);
    let _ = engine.meets_compliance_profile(&injected);
});
