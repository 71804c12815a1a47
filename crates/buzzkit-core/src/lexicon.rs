//! The three word lists the engine draws from.
//!
//! [`Lexicon::builtin`] returns the compiled-in catalogue. Custom lists can be
//! supplied through [`Lexicon::new`] or from the `[lexicon]` section of the
//! configuration; any list left unset keeps its built-in contents.

use buzzkit_config::LexiconConfig;

use crate::error::LexiconError;

/// General-purpose filler terms, used for injection and density scoring.
pub const VOCABULARY: &[&str] = &[
    "synergy",
    "leverage",
    "paradigm",
    "disrupt",
    "innovate",
    "monetize",
    "optimize",
    "strategize",
    "actualize",
    "incentivize",
    "circle back",
    "touch base",
    "deep dive",
    "bandwidth",
    "runway",
    "low-hanging fruit",
    "move the needle",
    "boil the ocean",
    "drinking from the firehose",
    "bleeding edge",
    "best-of-breed",
    "core competency",
    "value-add",
    "game-changer",
    "win-win",
    "thought leadership",
    "business intelligence",
    "actionable insights",
];

/// Verbs used in generated sentences and subject lines.
pub const ACTION_VERBS: &[&str] = &[
    "leverage",
    "utilize",
    "facilitate",
    "streamline",
    "maximize",
    "optimize",
    "revolutionize",
    "transform",
    "empower",
    "enable",
    "orchestrate",
    "synthesize",
    "aggregate",
    "architect",
    "envision",
];

/// Role and concept nouns used in generated sentences and subject lines.
pub const CONCEPT_NOUNS: &[&str] = &[
    "deliverables",
    "stakeholders",
    "bandwidth",
    "mindshare",
    "paradigm",
    "ecosystem",
    "value proposition",
    "synergies",
    "core competencies",
    "best practices",
    "action items",
    "key performance indicators",
    "return on investment",
    "total cost of ownership",
    "strategic initiatives",
];

/// An immutable set of word lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    vocabulary: Vec<String>,
    action_verbs: Vec<String>,
    concept_nouns: Vec<String>,
}

impl Lexicon {
    /// The compiled-in catalogue.
    pub fn builtin() -> Self {
        Self {
            vocabulary: owned(VOCABULARY),
            action_verbs: owned(ACTION_VERBS),
            concept_nouns: owned(CONCEPT_NOUNS),
        }
    }

    /// Build a lexicon from custom lists.
    ///
    /// Every list must be non-empty and no entry may be blank.
    pub fn new(
        vocabulary: Vec<String>,
        action_verbs: Vec<String>,
        concept_nouns: Vec<String>,
    ) -> Result<Self, LexiconError> {
        check_list("vocabulary", &vocabulary)?;
        check_list("action_verbs", &action_verbs)?;
        check_list("concept_nouns", &concept_nouns)?;
        Ok(Self {
            vocabulary,
            action_verbs,
            concept_nouns,
        })
    }

    /// Build a lexicon from configuration overrides, falling back to the
    /// built-in list for anything unset.
    pub fn from_config(config: &LexiconConfig) -> Result<Self, LexiconError> {
        let pick = |custom: &Option<Vec<String>>, builtin: &[&str]| {
            custom.clone().unwrap_or_else(|| owned(builtin))
        };
        Self::new(
            pick(&config.vocabulary, VOCABULARY),
            pick(&config.action_verbs, ACTION_VERBS),
            pick(&config.concept_nouns, CONCEPT_NOUNS),
        )
    }

    /// Buzzword vocabulary.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Action verbs.
    pub fn action_verbs(&self) -> &[String] {
        &self.action_verbs
    }

    /// Concept nouns.
    pub fn concept_nouns(&self) -> &[String] {
        &self.concept_nouns
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn check_list(list: &'static str, entries: &[String]) -> Result<(), LexiconError> {
    if entries.is_empty() {
        return Err(LexiconError::EmptyList { list });
    }
    match entries.iter().position(|e| e.trim().is_empty()) {
        Some(index) => Err(LexiconError::BlankEntry { list, index }),
        None => Ok(()),
    }
}
