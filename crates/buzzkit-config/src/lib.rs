#![deny(unsafe_code)]

//! Configuration loading and validation for buzzkit.
//!
//! Loads TOML configuration files and validates them before the engine is
//! built. [`AppConfig`] is the central configuration structure; every section
//! is optional and falls back to the built-in behavior.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Accepted values for `engine.insertion_mode`.
pub const INSERTION_MODES: [&str; 2] = ["first-space", "scatter"];

/// Accepted values for `logging.level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level application configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Engine behavior (seeding, insertion strategy).
    #[serde(default)]
    pub engine: EngineConfig,

    /// Thresholds for the compliance profile.
    #[serde(default)]
    pub compliance: ComplianceConfig,

    /// Optional replacements for the built-in word lists.
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fixed seed for the random source. When absent the engine seeds
    /// itself from the wall clock and output is not reproducible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Where injected buzzwords land: "first-space" or "scatter".
    #[serde(default = "default_insertion_mode")]
    pub insertion_mode: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            insertion_mode: default_insertion_mode(),
        }
    }
}

fn default_insertion_mode() -> String {
    "first-space".to_string()
}

/// Compliance profile thresholds.
///
/// The defaults are the historical fixed thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceConfig {
    /// Score must be strictly above this.
    #[serde(default = "default_min_score")]
    pub min_score: f64,

    /// Score must be strictly below this.
    #[serde(default = "default_max_score")]
    pub max_score: f64,

    /// Word count must be strictly above this.
    #[serde(default = "default_min_word_count")]
    pub min_word_count: usize,

    /// Score expressed as a percentage must be strictly above this.
    #[serde(default = "default_max_coherence_percent")]
    pub max_coherence_percent: u32,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            max_score: default_max_score(),
            min_word_count: default_min_word_count(),
            max_coherence_percent: default_max_coherence_percent(),
        }
    }
}

fn default_min_score() -> f64 {
    0.25
}

fn default_max_score() -> f64 {
    0.8
}

fn default_min_word_count() -> usize {
    50
}

fn default_max_coherence_percent() -> u32 {
    20
}

/// Word list overrides.
///
/// ## TOML Example
///
/// ```toml
/// [lexicon]
/// vocabulary = ["synergy", "circle back"]
/// action_verbs = ["leverage", "streamline"]
/// ```
///
/// Lists left out keep their built-in contents.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// General buzzword vocabulary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<Vec<String>>,

    /// Action verbs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_verbs: Option<Vec<String>>,

    /// Role and concept nouns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept_nouns: Option<Vec<String>>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "trace").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from a TOML file at the given path using async I/O.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path).await?;
        debug!(path = %path.display(), bytes = content.len(), "read config file");
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !INSERTION_MODES.contains(&self.engine.insertion_mode.as_str()) {
            return Err(ConfigError::Validation(format!(
                "engine.insertion_mode must be one of {:?}, got {:?}",
                INSERTION_MODES, self.engine.insertion_mode
            )));
        }

        let c = &self.compliance;
        if !c.min_score.is_finite() || !c.max_score.is_finite() {
            return Err(ConfigError::Validation(
                "compliance scores must be finite".to_string(),
            ));
        }
        if c.min_score < 0.0 {
            return Err(ConfigError::Validation(format!(
                "compliance.min_score must be non-negative, got {}",
                c.min_score
            )));
        }
        if c.min_score >= c.max_score {
            return Err(ConfigError::Validation(format!(
                "compliance.min_score ({}) must be below compliance.max_score ({})",
                c.min_score, c.max_score
            )));
        }
        if c.max_coherence_percent > 100 {
            return Err(ConfigError::Validation(format!(
                "compliance.max_coherence_percent must be at most 100, got {}",
                c.max_coherence_percent
            )));
        }

        let lists = [
            ("vocabulary", &self.lexicon.vocabulary),
            ("action_verbs", &self.lexicon.action_verbs),
            ("concept_nouns", &self.lexicon.concept_nouns),
        ];
        for (name, list) in lists {
            let Some(entries) = list else { continue };
            if entries.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "lexicon.{name} must not be empty when set"
                )));
            }
            if let Some(i) = entries.iter().position(|e| e.trim().is_empty()) {
                return Err(ConfigError::Validation(format!(
                    "lexicon.{name}[{i}] must not be blank"
                )));
            }
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {:?}, got {:?}",
                LOG_LEVELS, self.logging.level
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.engine.seed, None);
        assert_eq!(config.engine.insertion_mode, "first-space");
        assert_eq!(config.compliance.min_score, 0.25);
        assert_eq!(config.compliance.max_score, 0.8);
        assert_eq!(config.compliance.min_word_count, 50);
        assert_eq!(config.compliance.max_coherence_percent, 20);
        assert!(config.lexicon.vocabulary.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_default_config_validates() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config.engine.insertion_mode, "first-space");
        assert_eq!(config.compliance.min_word_count, 50);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml = r#"
            [engine]
            seed = 42
            insertion_mode = "scatter"

            [compliance]
            min_score = 0.1
            max_score = 0.9
            min_word_count = 10
            max_coherence_percent = 5

            [lexicon]
            vocabulary = ["synergy", "circle back"]
            action_verbs = ["leverage"]

            [logging]
            level = "debug"
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.engine.seed, Some(42));
        assert_eq!(config.engine.insertion_mode, "scatter");
        assert_eq!(config.compliance.min_score, 0.1);
        assert_eq!(config.compliance.max_score, 0.9);
        assert_eq!(config.compliance.min_word_count, 10);
        assert_eq!(config.compliance.max_coherence_percent, 5);
        assert_eq!(
            config.lexicon.vocabulary,
            Some(vec!["synergy".to_string(), "circle back".to_string()])
        );
        assert_eq!(config.lexicon.action_verbs, Some(vec!["leverage".to_string()]));
        assert!(config.lexicon.concept_nouns.is_none());
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_validation_rejects_unknown_insertion_mode() {
        let toml = r#"
            [engine]
            insertion_mode = "random"
        "#;
        assert!(AppConfig::parse(toml).is_err());
    }

    #[test]
    fn test_validation_rejects_inverted_scores() {
        let toml = r#"
            [compliance]
            min_score = 0.9
            max_score = 0.5
        "#;
        assert!(AppConfig::parse(toml).is_err());
    }

    #[test]
    fn test_validation_rejects_negative_min_score() {
        let toml = r#"
            [compliance]
            min_score = -0.1
        "#;
        assert!(AppConfig::parse(toml).is_err());
    }

    #[test]
    fn test_validation_rejects_nan_score() {
        let mut config = AppConfig::default();
        config.compliance.max_score = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_coherence_over_100() {
        let toml = r#"
            [compliance]
            max_coherence_percent = 150
        "#;
        assert!(AppConfig::parse(toml).is_err());
    }

    // ── Lexicon overrides ─────────────────────────────────────────────

    #[test]
    fn test_validation_rejects_empty_list() {
        let toml = r#"
            [lexicon]
            concept_nouns = []
        "#;
        let err = AppConfig::parse(toml).unwrap_err();
        assert!(err.to_string().contains("lexicon.concept_nouns"));
    }

    #[test]
    fn test_validation_rejects_blank_entry() {
        let toml = r#"
            [lexicon]
            vocabulary = ["synergy", "   "]
        "#;
        let err = AppConfig::parse(toml).unwrap_err();
        assert!(err.to_string().contains("lexicon.vocabulary[1]"));
    }

    #[test]
    fn test_validation_rejects_bad_log_level() {
        let toml = r#"
            [logging]
            level = "loud"
        "#;
        assert!(AppConfig::parse(toml).is_err());
    }

    #[test]
    fn test_serialize_omits_unset_options() {
        let rendered = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(!rendered.contains("seed"));
        assert!(!rendered.contains("vocabulary"));
        assert!(rendered.contains("insertion_mode = \"first-space\""));
    }

    // ── Async file-based loading ──────────────────────────────────────

    #[test_log::test(tokio::test)]
    async fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("buzzkit.toml");
        tokio::fs::write(&path, b"[engine]\nseed = 7\n")
            .await
            .unwrap();

        let config = AppConfig::load(&path).await.unwrap();
        assert_eq!(config.engine.seed, Some(7));
    }

    #[tokio::test]
    async fn test_load_nonexistent_file() {
        let result = AppConfig::load(Path::new("/nonexistent/buzzkit.toml")).await;
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[tokio::test]
    async fn test_load_invalid_toml_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        tokio::fs::write(&path, b"not valid toml [[[")
            .await
            .unwrap();

        let result = AppConfig::load(&path).await;
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    // ── Error display ─────────────────────────────────────────────────

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("bad value".to_string());
        assert_eq!(err.to_string(), "validation error: bad value");
    }
}
