//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use iqtest_domain::ScoringStrategyKind;
use std::path::PathBuf;

/// Output format for the assessment report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Scores, per-domain detail, profile and adaptive metrics
    Full,
    /// Full-scale score, percentile and classification only
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for iqtest_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => iqtest_domain::OutputFormat::Full,
            OutputFormat::Summary => iqtest_domain::OutputFormat::Summary,
            OutputFormat::Json => iqtest_domain::OutputFormat::Json,
        }
    }
}

/// Scoring strategy selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Seven-stage normed pipeline
    Scientific,
    /// Difficulty-weighted accuracy mapped onto the index scale
    WeightedAccuracy,
}

impl From<StrategyArg> for ScoringStrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Scientific => ScoringStrategyKind::Scientific,
            StrategyArg::WeightedAccuracy => ScoringStrategyKind::WeightedAccuracy,
        }
    }
}

/// CLI arguments for adaptive-iq
#[derive(Parser, Debug)]
#[command(name = "adaptive-iq")]
#[command(author, version, about = "Adaptive cognitive assessment across five domains")]
#[command(long_about = r#"
adaptive-iq administers an adaptive test over five cognitive domains
(Verbal Comprehension, Perceptual Reasoning, Working Memory, Processing Speed,
Fluid Reasoning) and scores it on the IQ index scale.

Each domain starts at medium difficulty; every answer moves it one step up
(correct) or down (incorrect). A domain ends after 10 items, or earlier once
three consecutive answers confirm a ceiling or a floor.

Configuration files are loaded from (in priority order):
1. ADAPTIVE_IQ_* environment variables
2. --config <path>            Explicit config file
3. ./adaptive-iq.toml         Project-level config
4. ~/.config/adaptive-iq/config.toml   Global config

Example:
  adaptive-iq take --age 16 --catalog questions.json
  adaptive-iq resume
  adaptive-iq report session.json -o summary
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Question catalog (JSON file)
    #[arg(long, value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Where the in-progress session is saved
    #[arg(long, value_name = "PATH", global = true)]
    pub state_file: Option<PathBuf>,

    /// Scoring strategy
    #[arg(long, value_enum, global = true)]
    pub strategy: Option<StrategyArg>,

    /// Seed for reproducible question selection
    #[arg(long, value_name = "N", global = true)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Also write the plain-text report into this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub export: Option<PathBuf>,

    /// Append structured session events to this JSONL file
    #[arg(long, value_name = "PATH", global = true)]
    pub event_log: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a new assessment, discarding any saved session
    Take {
        /// Age of the test-taker in years
        #[arg(long)]
        age: Option<u32>,
    },
    /// Continue the saved session
    Resume,
    /// Score a saved session file without asking any questions
    Report {
        /// Session state JSON written by `take` or `resume`
        file: PathBuf,
    },
    /// Show configuration sources and the effective configuration
    Config {
        /// Describe a single key (e.g. `assessment.strategy`)
        key: Option<String>,
    },
}
