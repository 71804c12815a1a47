//! Configuration builders for tests.
//!
//! Use [`TestConfigBuilder`] to create customised [`AppConfig`] values, or
//! [`TempConfigFile`] when a test needs the config on disk.

use std::path::PathBuf;

use buzzkit_config::AppConfig;
use tempfile::TempDir;

/// Fluent builder for [`AppConfig`] in tests.
///
/// # Example
///
/// ```ignore
/// let config = TestConfigBuilder::new()
///     .seed(42)
///     .insertion_mode("scatter")
///     .build();
/// ```
pub struct TestConfigBuilder {
    config: AppConfig,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.engine.seed = Some(seed);
        self
    }

    pub fn insertion_mode(mut self, mode: &str) -> Self {
        self.config.engine.insertion_mode = mode.to_string();
        self
    }

    pub fn min_word_count(mut self, n: usize) -> Self {
        self.config.compliance.min_word_count = n;
        self
    }

    pub fn score_band(mut self, min: f64, max: f64) -> Self {
        self.config.compliance.min_score = min;
        self.config.compliance.max_score = max;
        self
    }

    pub fn vocabulary(mut self, words: &[&str]) -> Self {
        self.config.lexicon.vocabulary = Some(words.iter().map(|w| w.to_string()).collect());
        self
    }

    pub fn log_level(mut self, level: &str) -> Self {
        self.config.logging.level = level.to_string();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A TOML config file in a temp directory, deleted on drop.
pub struct TempConfigFile {
    pub path: PathBuf,
    _temp_dir: TempDir,
}

impl TempConfigFile {
    /// Write `toml_content` to `buzzkit.toml` in a fresh temp directory.
    pub async fn with_toml(toml_content: &str) -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("buzzkit.toml");
        tokio::fs::write(&path, toml_content)
            .await
            .expect("failed to write test config");
        Self {
            path,
            _temp_dir: temp_dir,
        }
    }

    /// Load and validate the file.
    pub async fn load(&self) -> AppConfig {
        AppConfig::load(&self.path)
            .await
            .expect("failed to parse test config")
    }
}
