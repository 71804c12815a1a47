//! Building engines from configuration files.

use buzzkit_core::{InsertionMode, LexiconEngine};
use buzzkit_test_utils::config::{TempConfigFile, TestConfigBuilder};
use buzzkit_test_utils::engine::{DEFAULT_TEST_SEED, seeded_engine};
use buzzkit_test_utils::text::synthetic_text;
use buzzkit_test_utils::tracing_setup::init_test_tracing;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_engine_from_config_file() {
    init_test_tracing();
    let file = TempConfigFile::with_toml(
        r#"
        [engine]
        seed = 24301
        insertion_mode = "scatter"

        [lexicon]
        vocabulary = ["synergy"]
        "#,
    )
    .await;

    let config = file.load().await;
    let mut engine = LexiconEngine::from_config(&config).unwrap();
    assert_eq!(engine.insertion_mode(), InsertionMode::Scatter);

    let out = engine.inject_buzzwords("one two three");
    assert_eq!(out.matches("synergy").count(), 3);
}

#[test]
fn test_seeded_config_matches_seeded_engine() {
    let config = TestConfigBuilder::new().seed(DEFAULT_TEST_SEED).build();
    let mut from_config = LexiconEngine::from_config(&config).unwrap();
    let mut direct = seeded_engine();
    assert_eq!(from_config.generate_speech(3), direct.generate_speech(3));
    assert_eq!(from_config.obfuscate("x"), direct.obfuscate("y"));
}

#[test]
fn test_configured_thresholds_change_verdict() {
    let text = synthetic_text(20, 8, "synergy");

    let mut strict = seeded_engine();
    assert!(!strict.meets_compliance_profile(&text));

    let config = TestConfigBuilder::new()
        .seed(1)
        .min_word_count(10)
        .score_band(0.1, 0.9)
        .build();
    let mut relaxed = LexiconEngine::from_config(&config).unwrap();
    assert!(relaxed.meets_compliance_profile(&text));
    assert_eq!(relaxed.synergy_level(), 400);
}

#[test]
fn test_configured_vocabulary_drives_scoring() {
    let config = TestConfigBuilder::new()
        .seed(1)
        .vocabulary(&["lorem"])
        .build();
    let mut engine = LexiconEngine::from_config(&config).unwrap();
    // synthetic filler is now the buzzword
    let score = engine.score_density(&synthetic_text(4, 0, "synergy"));
    assert_eq!(score, 0.95);
}
