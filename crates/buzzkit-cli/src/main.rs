#![deny(unsafe_code)]

//! buzzkit CLI: the lexicon engine operations as subcommands.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use buzzkit_config::AppConfig;
use buzzkit_core::engine::DEFAULT_BAD_NEWS;
use buzzkit_core::build_info::BuildInfo;
use buzzkit_core::{LexiconEngine, clamp_unit_count};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Generate, inject, and score corporate buzzwords.
#[derive(Debug, Parser)]
#[command(name = "buzzkit", version, about, long_about = None)]
struct Cli {
    /// Path to configuration file.
    #[arg(short, long, default_value = "buzzkit.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Fixed random seed; overrides `engine.seed` from the config file.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate sentences of corporate speech.
    Speak {
        /// Number of sentences. Negative values produce nothing.
        #[arg(short, long, default_value_t = 3, allow_negative_numbers = true)]
        units: i64,
    },

    /// Insert buzzwords into text.
    Inject {
        /// Input text; read from stdin when omitted or "-".
        text: Option<String>,
    },

    /// Score the buzzword density of text.
    Score {
        /// Input text; read from stdin when omitted or "-".
        text: Option<String>,

        /// Print the full density report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Check text against the compliance profile (exit status 1 if it fails).
    Check {
        /// Input text; read from stdin when omitted or "-".
        text: Option<String>,

        /// Print the individual checks as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate an urgent e-mail subject line.
    Subject,

    /// Replace a message with reassuring management-speak.
    Obfuscate {
        /// Message to obscure; read from stdin when omitted or "-".
        text: Option<String>,
    },

    /// Print a speech, a subject line, and an obfuscated piece of bad news.
    Demo {
        /// Bad news to obfuscate.
        #[arg(long)]
        bad_news: Option<String>,
    },

    /// Validate and display configuration.
    Config {
        /// Show the resolved configuration.
        #[arg(long)]
        show: bool,
    },

    /// Print version and build information.
    Version {
        /// Print the build metadata as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let (mut config, from_file) = load_config(&cli.config).await?;
    if let Some(seed) = cli.seed {
        config.engine.seed = Some(seed);
    }

    let filter = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    if from_file {
        debug!(path = %cli.config.display(), "loaded configuration");
    } else {
        info!(path = %cli.config.display(), "Config file not found, using defaults");
    }

    let mut engine = LexiconEngine::from_config(&config)?;
    let mut stdout = io::stdout().lock();
    let succeeded = execute(cli.command, &mut engine, &config, &cli.config, &mut stdout)?;
    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Run one subcommand, writing its result to `out`. Returns `false` when the
/// command ran but its check failed.
fn execute<W: Write>(
    command: Commands,
    engine: &mut LexiconEngine,
    config: &AppConfig,
    config_path: &Path,
    out: &mut W,
) -> Result<bool> {
    match command {
        Commands::Speak { units } => {
            let speech = engine.generate_speech(clamp_unit_count(units));
            writeln!(out, "{speech}")?;
        }
        Commands::Inject { text } => {
            let text = resolve_text(text)?;
            writeln!(out, "{}", engine.inject_buzzwords(&text))?;
        }
        Commands::Score { text, json } => {
            let text = resolve_text(text)?;
            let report = engine.score_report(&text);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                writeln!(out, "{}", report.score)?;
            }
        }
        Commands::Check { text, json } => {
            let text = resolve_text(text)?;
            let compliant = engine.meets_compliance_profile(&text);
            if json {
                let verdict = engine.compliance_verdict(&text);
                writeln!(out, "{}", serde_json::to_string_pretty(&verdict)?)?;
            } else {
                writeln!(out, "{}", if compliant { "compliant" } else { "non-compliant" })?;
            }
            return Ok(compliant);
        }
        Commands::Subject => {
            writeln!(out, "{}", engine.generate_urgent_subject())?;
        }
        Commands::Obfuscate { text } => {
            let text = resolve_text(text)?;
            writeln!(out, "{}", engine.obfuscate(&text))?;
        }
        Commands::Demo { bad_news } => {
            let bad_news = bad_news.as_deref().unwrap_or(DEFAULT_BAD_NEWS);
            writeln!(out, "{}", engine.briefing(bad_news))?;
        }
        Commands::Config { show } => {
            if show {
                let toml_str = toml::to_string_pretty(config).context("rendering config as TOML")?;
                writeln!(out, "{toml_str}")?;
            } else {
                writeln!(out, "Configuration at '{}' is valid.", config_path.display())?;
            }
        }
        Commands::Version { json } => {
            let info = BuildInfo::current();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
            } else {
                writeln!(out, "buzzkit {info}")?;
            }
        }
    }
    Ok(true)
}

/// Use the argument if given, otherwise read all of stdin.
///
/// Only the trailing line ending is stripped; spaces are significant.
fn resolve_text(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) if text != "-" => Ok(text),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading text from stdin")?;
            Ok(strip_line_ending(&buf).to_string())
        }
    }
}

fn strip_line_ending(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .unwrap_or(s)
}

/// Load the config file if it exists; defaults otherwise. The flag reports
/// whether a file was read.
async fn load_config(path: &Path) -> Result<(AppConfig, bool)> {
    if path.exists() {
        let config = AppConfig::load(path)
            .await
            .with_context(|| format!("loading config from '{}'", path.display()))?;
        Ok((config, true))
    } else {
        Ok((AppConfig::default(), false))
    }
}
