//! Error types for lexicon construction and engine configuration.
//!
//! The text operations themselves are total and never fail; errors only
//! arise while building a [`Lexicon`](crate::Lexicon) or an engine from
//! configuration.

/// Errors from building a [`Lexicon`](crate::Lexicon) out of caller-supplied lists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexiconError {
    #[error("word list `{list}` must contain at least one entry")]
    EmptyList { list: &'static str },

    #[error("word list `{list}` has a blank entry at index {index}")]
    BlankEntry { list: &'static str, index: usize },
}

/// Errors from building a [`LexiconEngine`](crate::LexiconEngine) out of configuration.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid lexicon: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("invalid engine configuration: {0}")]
    Config(String),
}
