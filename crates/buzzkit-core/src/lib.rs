#![deny(unsafe_code)]

//! buzzkit core library.
//!
//! A [`LexiconEngine`] synthesizes corporate prose from a [`Lexicon`],
//! rewrites text to raise its buzzword density, and scores text against a
//! target density profile. Everything here is synchronous and operates on
//! in-memory strings; configuration loading lives in `buzzkit-config`.

/// Word counting, buzzword density scoring, and compliance checks.
pub mod analysis;
/// Compile-time build metadata (version, git hash, profile).
pub mod build_info;
/// The engine and its generation, injection, and scoring operations.
pub mod engine;
/// Error types for lexicon and engine construction.
pub mod error;
/// Built-in and configurable word lists.
pub mod lexicon;

pub use analysis::{ComplianceThresholds, ComplianceVerdict, DensityReport};
pub use engine::{Briefing, InsertionMode, LexiconEngine, clamp_unit_count};
pub use error::{EngineError, LexiconError};
pub use lexicon::Lexicon;
