//! The lexicon engine: prose generation, buzzword injection, and scoring.
//!
//! Every operation that draws random numbers or records a score takes
//! `&mut self`, so an engine is owned by one caller at a time. Share it
//! behind a `Mutex` if several callers need it.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use buzzkit_config::AppConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

use crate::analysis::{ComplianceThresholds, ComplianceVerdict, DensityReport, word_count};
use crate::error::EngineError;
use crate::lexicon::Lexicon;

/// Lower bound on the number of buzzwords a single injection pass inserts.
pub const MIN_BUZZWORDS_PER_UNIT: usize = 3;

/// Multiplier applied to every density score.
pub const DISRUPTION_COEFFICIENT: f64 = 1.0;

/// Units of speech in a [`Briefing`].
pub const BRIEFING_UNITS: usize = 3;

/// Bad news used by `buzzkit demo` when none is supplied.
pub const DEFAULT_BAD_NEWS: &str = "The project is three months behind schedule and over budget.";

/// Where [`LexiconEngine::inject_buzzwords`] places each buzzword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertionMode {
    /// Right after the first space of the input. Successive insertions
    /// therefore stack in front of one another.
    #[default]
    FirstSpace,
    /// Right after a uniformly chosen space of the input. Insertions that
    /// land on the same space stack the same way.
    Scatter,
}

impl FromStr for InsertionMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-space" => Ok(Self::FirstSpace),
            "scatter" => Ok(Self::Scatter),
            other => Err(EngineError::Config(format!(
                "unknown insertion mode {other:?}"
            ))),
        }
    }
}

/// Output of [`LexiconEngine::briefing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Briefing {
    pub speech: String,
    pub subject: String,
    pub original: String,
    pub obfuscated: String,
}

impl fmt::Display for Briefing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated Corporate Speak:")?;
        writeln!(f, "{}", self.speech)?;
        writeln!(f)?;
        writeln!(f, "Urgent Email Subject:")?;
        writeln!(f, "{}", self.subject)?;
        writeln!(f)?;
        writeln!(f, "Original: {}", self.original)?;
        writeln!(f, "Obfuscated:")?;
        write!(f, "{}", self.obfuscated)
    }
}

/// Clamp a signed unit count from an outer surface to a usable `usize`.
///
/// Negative counts become zero.
pub fn clamp_unit_count(units: i64) -> usize {
    if units < 0 {
        warn!(units, "negative unit count clamped to zero");
        return 0;
    }
    usize::try_from(units).unwrap_or(usize::MAX)
}

/// Owns the word lists, the random source, and the last recorded score.
#[derive(Debug, Clone)]
pub struct LexiconEngine<R = StdRng> {
    lexicon: Lexicon,
    rng: R,
    insertion_mode: InsertionMode,
    thresholds: ComplianceThresholds,
    synergy_level: u64,
    disruption_coefficient: f64,
}

impl LexiconEngine<StdRng> {
    /// Built-in lexicon, seeded from the wall clock.
    pub fn new() -> Self {
        let seed = time_seed();
        debug!(seed, "seeding engine from wall clock");
        Self::with_seed(seed)
    }

    /// Built-in lexicon with a fixed seed; output is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Lexicon::builtin(), StdRng::seed_from_u64(seed))
    }

    /// Build an engine from loaded configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, EngineError> {
        let lexicon = Lexicon::from_config(&config.lexicon)?;
        let insertion_mode = config.engine.insertion_mode.parse()?;
        let seed = config.engine.seed.unwrap_or_else(time_seed);
        debug!(
            seed,
            seeded = config.engine.seed.is_some(),
            ?insertion_mode,
            "building engine from config"
        );
        Ok(Self::with_rng(lexicon, StdRng::seed_from_u64(seed))
            .with_insertion_mode(insertion_mode)
            .with_thresholds(ComplianceThresholds::from(&config.compliance)))
    }
}

impl Default for LexiconEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> LexiconEngine<R> {
    /// Build an engine over any lexicon and random source.
    pub fn with_rng(lexicon: Lexicon, rng: R) -> Self {
        Self {
            lexicon,
            rng,
            insertion_mode: InsertionMode::default(),
            thresholds: ComplianceThresholds::default(),
            synergy_level: 0,
            disruption_coefficient: DISRUPTION_COEFFICIENT,
        }
    }

    pub fn with_insertion_mode(mut self, mode: InsertionMode) -> Self {
        self.insertion_mode = mode;
        self
    }

    pub fn with_thresholds(mut self, thresholds: ComplianceThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn insertion_mode(&self) -> InsertionMode {
        self.insertion_mode
    }

    pub fn thresholds(&self) -> &ComplianceThresholds {
        &self.thresholds
    }

    /// `floor(ratio * 1000)` from the most recent scoring call; zero before any.
    pub fn synergy_level(&self) -> u64 {
        self.synergy_level
    }

    pub fn disruption_coefficient(&self) -> f64 {
        self.disruption_coefficient
    }

    // ── Generation ────────────────────────────────────────────────────

    /// Generate `units` sentences, each followed by a single space.
    pub fn generate_speech(&mut self, units: usize) -> String {
        debug!(units, "generating speech");
        let mut out = String::new();
        for _ in 0..units {
            out.push_str(&self.sentence());
            out.push(' ');
        }
        out
    }

    fn sentence(&mut self) -> String {
        let lex = &self.lexicon;
        let rng = &mut self.rng;
        let verb = pick(rng, lex.action_verbs());
        let noun = pick(rng, lex.concept_nouns());
        let second_verb = pick(rng, lex.action_verbs());
        let buzzword = pick(rng, lex.vocabulary());
        let third_verb = pick(rng, lex.action_verbs());
        let second_noun = pick(rng, lex.concept_nouns());
        format!(
            "We need to {verb} our {noun} to {second_verb} {buzzword} and {third_verb} {second_noun}."
        )
    }

    /// Subject line of the form `URGENT: Need to <verb> <noun> by EOD`.
    pub fn generate_urgent_subject(&mut self) -> String {
        let lex = &self.lexicon;
        let rng = &mut self.rng;
        let verb = pick(rng, lex.action_verbs());
        let noun = pick(rng, lex.concept_nouns());
        format!("URGENT: Need to {verb} {noun} by EOD")
    }

    /// Replace `message` wholesale with a reassuring non-statement.
    ///
    /// The message is never inspected. The first verb gets a literal `ing`
    /// suffix, so "leverage" becomes "leverageing".
    pub fn obfuscate(&mut self, message: &str) -> String {
        debug!(discarded_len = message.len(), "obfuscating message");
        let lex = &self.lexicon;
        let rng = &mut self.rng;
        let verb = pick(rng, lex.action_verbs());
        let noun = pick(rng, lex.concept_nouns());
        let second_verb = pick(rng, lex.action_verbs());
        let second_noun = pick(rng, lex.concept_nouns());
        let third_verb = pick(rng, lex.action_verbs());
        let buzzword = pick(rng, lex.vocabulary());
        let third_noun = pick(rng, lex.concept_nouns());
        format!(
            "We're strategically {verb}ing our {noun} to {second_verb} {second_noun} and \
             {third_verb} {buzzword} across {third_noun} going forward."
        )
    }

    /// Three units of speech, a subject line, and `bad_news` obfuscated,
    /// generated in that order.
    pub fn briefing(&mut self, bad_news: &str) -> Briefing {
        let speech = self.generate_speech(BRIEFING_UNITS);
        let subject = self.generate_urgent_subject();
        let obfuscated = self.obfuscate(bad_news);
        Briefing {
            speech,
            subject,
            original: bad_news.to_string(),
            obfuscated,
        }
    }

    // ── Injection ─────────────────────────────────────────────────────

    /// How many buzzwords [`inject_buzzwords`](Self::inject_buzzwords) will
    /// insert into `text`: one per five words, less the distinct buzzwords
    /// already present, but never fewer than [`MIN_BUZZWORDS_PER_UNIT`].
    pub fn required_insertions(&self, text: &str) -> usize {
        let words = word_count(text);
        let present = crate::analysis::distinct_present(text, self.lexicon.vocabulary());
        (words / 5)
            .saturating_sub(present)
            .max(MIN_BUZZWORDS_PER_UNIT)
    }

    /// Return a copy of `input` with buzzwords inserted.
    ///
    /// Each insertion adds `"<buzzword> "` right after one space of the
    /// input: the first space in [`InsertionMode::FirstSpace`], a uniformly
    /// chosen one in [`InsertionMode::Scatter`]. Buzzwords sharing a space
    /// stack newest first. A string with no space is returned unchanged,
    /// although a buzzword is still drawn for every planned insertion.
    ///
    /// Runs in time linear in the input plus the inserted text.
    pub fn inject_buzzwords(&mut self, input: &str) -> String {
        let insertions = self.required_insertions(input);
        let spaces: Vec<usize> = match self.insertion_mode {
            InsertionMode::FirstSpace => input.find(' ').into_iter().collect(),
            InsertionMode::Scatter => input.match_indices(' ').map(|(i, _)| i).collect(),
        };

        // slots[i] holds the buzzwords placed after spaces[i], oldest first
        let mut slots: Vec<Vec<&str>> = vec![Vec::new(); spaces.len()];
        for _ in 0..insertions {
            let buzzword = pick(&mut self.rng, self.lexicon.vocabulary());
            let slot = match (self.insertion_mode, spaces.len()) {
                (_, 0) => None,
                (InsertionMode::FirstSpace, _) => Some(0),
                (InsertionMode::Scatter, n) => Some(self.rng.gen_range(0..n)),
            };
            if let Some(slot) = slot {
                slots[slot].push(buzzword);
            }
        }

        let added: usize = slots.iter().flatten().map(|w| w.len() + 1).sum();
        let mut result = String::with_capacity(input.len() + added);
        let mut copied = 0;
        for (&space, slot) in spaces.iter().zip(&slots) {
            result.push_str(&input[copied..=space]);
            for buzzword in slot.iter().rev() {
                result.push_str(buzzword);
                result.push(' ');
            }
            copied = space + 1;
        }
        result.push_str(&input[copied..]);

        if spaces.is_empty() {
            trace!(planned = insertions, "no space to insert after, skipping");
        }
        debug!(
            planned = insertions,
            inserted = slots.iter().map(Vec::len).sum::<usize>(),
            mode = ?self.insertion_mode,
            "injected buzzwords"
        );
        result
    }

    // ── Scoring ───────────────────────────────────────────────────────

    /// Score `text` without recording anything on the engine.
    pub fn analyze(&self, text: &str) -> DensityReport {
        DensityReport::compute(text, self.lexicon.vocabulary(), self.disruption_coefficient)
    }

    /// Score `text` and record its synergy level on the engine.
    pub fn score_report(&mut self, text: &str) -> DensityReport {
        let report = self.analyze(text);
        self.synergy_level = report.synergy_level;
        debug!(
            word_count = report.word_count,
            hits = report.buzzword_hits,
            synergy_level = report.synergy_level,
            score = report.score,
            "scored density"
        );
        report
    }

    /// Density score of `text`. Overwrites [`synergy_level`](Self::synergy_level).
    pub fn score_density(&mut self, text: &str) -> f64 {
        self.score_report(text).score
    }

    /// Evaluate each compliance check without recording anything.
    pub fn compliance_verdict(&self, text: &str) -> ComplianceVerdict {
        ComplianceVerdict::evaluate(self.analyze(text), &self.thresholds)
    }

    /// Whether `text` satisfies every compliance check. Scores the text, so
    /// [`synergy_level`](Self::synergy_level) is overwritten.
    pub fn meets_compliance_profile(&mut self, text: &str) -> bool {
        let report = self.score_report(text);
        ComplianceVerdict::evaluate(report, &self.thresholds).passes()
    }
}

/// Uniform draw by index. Lexicon lists are never empty.
fn pick<'a, R: Rng>(rng: &mut R, list: &'a [String]) -> &'a str {
    &list[rng.gen_range(0..list.len())]
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
