#![deny(unsafe_code)]

//! Shared test utilities for the buzzkit workspace.
//!
//! Config builders, seeded engines, synthetic text, and tracing setup, so
//! that individual crate tests stay short.
//!
//! Add this crate as a `[dev-dependency]` in any workspace member:
//!
//! ```toml
//! [dev-dependencies]
//! buzzkit-test-utils = { workspace = true }
//! ```

pub mod config;
pub mod engine;
pub mod text;
pub mod tracing_setup;
