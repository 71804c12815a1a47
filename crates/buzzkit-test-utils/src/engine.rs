//! Engine fixtures.
//!
//! All engines here are seeded, so a failing test reproduces exactly.

use buzzkit_core::{Lexicon, LexiconEngine};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seed used when a test does not care which one.
pub const DEFAULT_TEST_SEED: u64 = 0x5EED;

/// Built-in lexicon with [`DEFAULT_TEST_SEED`].
pub fn seeded_engine() -> LexiconEngine {
    LexiconEngine::with_seed(DEFAULT_TEST_SEED)
}

/// An engine whose every list holds exactly one entry, so generated and
/// injected text is fully predictable.
pub fn single_entry_engine(buzzword: &str, verb: &str, noun: &str) -> LexiconEngine {
    let lexicon = Lexicon::new(
        vec![buzzword.to_string()],
        vec![verb.to_string()],
        vec![noun.to_string()],
    )
    .expect("single-entry lexicon");
    LexiconEngine::with_rng(lexicon, StdRng::seed_from_u64(DEFAULT_TEST_SEED))
}
