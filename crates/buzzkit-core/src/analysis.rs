//! Vocabulary density analysis.
//!
//! Word counts here are approximate by construction: a "word" is whatever
//! sits between single space characters, so the count is the number of
//! `' '` bytes plus one. Tabs, newlines and runs of spaces are not collapsed.

use serde::Serialize;

use buzzkit_config::ComplianceConfig;

/// Scale applied to the raw buzzword ratio before it is reported.
pub const OPTIMAL_DENSITY: f64 = 0.95;

/// Default upper bound on "coherence", as a percentage of the score.
pub const MAX_COHERENCE_PERCENT: u32 = 20;

/// Approximate word count: space characters plus one.
///
/// The empty string counts as one word.
pub fn word_count(text: &str) -> usize {
    text.bytes().filter(|&b| b == b' ').count() + 1
}

/// Count non-overlapping occurrences of `needle`, scanning left to right and
/// resuming after the end of each match.
///
/// An empty needle matches nothing.
pub fn count_occurrences(text: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    text.matches(needle).count()
}

/// Total buzzword hits: the sum of [`count_occurrences`] for each entry.
pub fn buzzword_hits<S: AsRef<str>>(text: &str, vocabulary: &[S]) -> usize {
    vocabulary
        .iter()
        .map(|w| count_occurrences(text, w.as_ref()))
        .sum()
}

/// Number of distinct vocabulary entries that occur at least once.
pub fn distinct_present<S: AsRef<str>>(text: &str, vocabulary: &[S]) -> usize {
    vocabulary
        .iter()
        .filter(|w| !w.as_ref().is_empty() && text.contains(w.as_ref()))
        .count()
}

/// Result of a density scoring pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DensityReport {
    /// Approximate word count (see [`word_count`]).
    pub word_count: usize,
    /// Total non-overlapping buzzword occurrences.
    pub buzzword_hits: usize,
    /// `buzzword_hits / word_count`.
    pub ratio: f64,
    /// `floor(ratio * 1000)`.
    pub synergy_level: u64,
    /// `ratio * disruption_coefficient * OPTIMAL_DENSITY`.
    pub score: f64,
}

impl DensityReport {
    /// Score `text` against `vocabulary`.
    pub fn compute<S: AsRef<str>>(text: &str, vocabulary: &[S], disruption_coefficient: f64) -> Self {
        let word_count = word_count(text);
        let buzzword_hits = buzzword_hits(text, vocabulary);
        let ratio = buzzword_hits as f64 / word_count as f64;
        Self {
            word_count,
            buzzword_hits,
            ratio,
            synergy_level: (ratio * 1000.0).floor() as u64,
            score: ratio * disruption_coefficient * OPTIMAL_DENSITY,
        }
    }
}

/// Thresholds for the compliance profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplianceThresholds {
    /// Score must be strictly above this.
    pub min_score: f64,
    /// Score must be strictly below this.
    pub max_score: f64,
    /// Word count must be strictly above this.
    pub min_word_count: usize,
    /// `score * 100` must be strictly above this.
    pub max_coherence_percent: u32,
}

impl Default for ComplianceThresholds {
    fn default() -> Self {
        Self {
            min_score: 0.25,
            max_score: 0.8,
            min_word_count: 50,
            max_coherence_percent: MAX_COHERENCE_PERCENT,
        }
    }
}

impl From<&ComplianceConfig> for ComplianceThresholds {
    fn from(config: &ComplianceConfig) -> Self {
        Self {
            min_score: config.min_score,
            max_score: config.max_score,
            min_word_count: config.min_word_count,
            max_coherence_percent: config.max_coherence_percent,
        }
    }
}

/// The individual compliance checks for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplianceVerdict {
    /// `score > min_score`.
    pub has_enough_buzzwords: bool,
    /// `word_count > min_word_count && score < max_score`.
    pub sufficiently_vague: bool,
    /// `score * 100 > max_coherence_percent`.
    pub properly_meaningless: bool,
    /// The scoring pass the checks were evaluated against.
    pub report: DensityReport,
}

impl ComplianceVerdict {
    /// Evaluate the thresholds against a scoring pass.
    pub fn evaluate(report: DensityReport, thresholds: &ComplianceThresholds) -> Self {
        let score = report.score;
        Self {
            has_enough_buzzwords: score > thresholds.min_score,
            sufficiently_vague: report.word_count > thresholds.min_word_count
                && score < thresholds.max_score,
            properly_meaningless: score * 100.0 > f64::from(thresholds.max_coherence_percent),
            report,
        }
    }

    /// Whether all checks hold.
    pub fn passes(&self) -> bool {
        self.has_enough_buzzwords && self.sufficiently_vague && self.properly_meaningless
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_word_count_counts_spaces() {
        assert_eq!(word_count(""), 1);
        assert_eq!(word_count("hello"), 1);
        assert_eq!(word_count("hello world"), 2);
        assert_eq!(word_count("a  b"), 3);
        assert_eq!(word_count(" "), 2);
    }

    #[test]
    fn test_word_count_ignores_other_whitespace() {
        assert_eq!(word_count("a\tb\nc"), 1);
    }

    #[test]
    fn test_count_occurrences_non_overlapping() {
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("aaa", "aa"), 1);
        assert_eq!(count_occurrences("synergy synergy", "synergy"), 2);
        assert_eq!(count_occurrences("nothing here", "synergy"), 0);
    }

    #[test]
    fn test_count_occurrences_empty_needle() {
        assert_eq!(count_occurrences("anything", ""), 0);
    }

    #[test]
    fn test_buzzword_hits_sums_every_entry() {
        let vocab = ["deep dive", "dive"];
        // "dive" is counted again inside "deep dive"
        assert_eq!(buzzword_hits("a deep dive", &vocab), 2);
    }

    #[test]
    fn test_distinct_present() {
        let vocab = ["synergy", "runway", "win-win"];
        assert_eq!(distinct_present("synergy synergy runway", &vocab), 2);
        assert_eq!(distinct_present("", &vocab), 0);
    }

    #[test]
    fn test_density_report_three_synergies() {
        let report = DensityReport::compute("synergy synergy synergy", &["synergy"], 1.0);
        assert_eq!(report.word_count, 3);
        assert_eq!(report.buzzword_hits, 3);
        assert_eq!(report.ratio, 1.0);
        assert_eq!(report.synergy_level, 1000);
        assert_eq!(report.score, 0.95);
    }

    #[test]
    fn test_density_report_empty_text() {
        let report = DensityReport::compute("", &["synergy"], 1.0);
        assert_eq!(report.word_count, 1);
        assert_eq!(report.buzzword_hits, 0);
        assert_eq!(report.score, 0.0);
        assert_eq!(report.synergy_level, 0);
    }

    #[test]
    fn test_density_report_floors_synergy_level() {
        // 1 hit over 3 words: ratio 0.333.., level 333
        let report = DensityReport::compute("synergy is here", &["synergy"], 1.0);
        assert_eq!(report.synergy_level, 333);
    }

    #[test]
    fn test_density_report_serializes_all_fields() {
        let report = DensityReport::compute("synergy runway", &["synergy", "runway"], 1.0);
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["word_count"], 2);
        assert_eq!(json["buzzword_hits"], 2);
        assert_eq!(json["synergy_level"], 1000);
        assert_eq!(json["score"], 0.95);
    }

    #[test]
    fn test_default_thresholds() {
        let t = ComplianceThresholds::default();
        assert_eq!(t.min_score, 0.25);
        assert_eq!(t.max_score, 0.8);
        assert_eq!(t.min_word_count, 50);
        assert_eq!(t.max_coherence_percent, 20);
    }

    #[test]
    fn test_thresholds_from_default_config_match_defaults() {
        let t = ComplianceThresholds::from(&ComplianceConfig::default());
        assert_eq!(t, ComplianceThresholds::default());
    }

    fn report(word_count: usize, score: f64) -> DensityReport {
        DensityReport {
            word_count,
            buzzword_hits: 0,
            ratio: score / OPTIMAL_DENSITY,
            synergy_level: 0,
            score,
        }
    }

    #[test]
    fn test_verdict_passes_in_band() {
        let v = ComplianceVerdict::evaluate(report(60, 0.5), &ComplianceThresholds::default());
        assert!(v.has_enough_buzzwords);
        assert!(v.sufficiently_vague);
        assert!(v.properly_meaningless);
        assert!(v.passes());
    }

    #[test]
    fn test_verdict_fails_on_word_count_floor() {
        let v = ComplianceVerdict::evaluate(report(50, 0.5), &ComplianceThresholds::default());
        assert!(!v.sufficiently_vague);
        assert!(!v.passes());
    }

    #[test]
    fn test_verdict_fails_above_max_score() {
        let v = ComplianceVerdict::evaluate(report(100, 0.8), &ComplianceThresholds::default());
        assert!(v.has_enough_buzzwords);
        assert!(!v.sufficiently_vague);
        assert!(!v.passes());
    }

    #[test]
    fn test_verdict_fails_at_min_score() {
        let v = ComplianceVerdict::evaluate(report(100, 0.25), &ComplianceThresholds::default());
        assert!(!v.has_enough_buzzwords);
        assert!(v.properly_meaningless);
        assert!(!v.passes());
    }
}
