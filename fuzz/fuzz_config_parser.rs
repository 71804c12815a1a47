//! Fuzz target for the TOML configuration parser.
//!
//! Run with: cargo +nightly fuzz run fuzz_config_parser
//!
//! Feeds arbitrary UTF-8 to `AppConfig::parse()`. Any config that passes
//! validation must also build an engine.

#![no_main]

use buzzkit_config::AppConfig;
use buzzkit_core::LexiconEngine;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = AppConfig::parse(s) {
        assert!(LexiconEngine::from_config(&config).is_ok());
    }
});
