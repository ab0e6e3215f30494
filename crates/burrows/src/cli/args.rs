//! Clap argument definitions for the `burrows` CLI.

use std::path::PathBuf;

use burrows_model::TokenizerKind;
use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "burrows")]
#[command(about = "Authorship attribution with Burrows' Delta")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Flags that override the `[model]`, `[training]` and `[corpus]` settings.
#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Candidate vocabulary size; repeat for several (0 = all words) [default: 150 200 250 300]
    #[arg(short = 'w', long = "words")]
    pub sizes: Vec<usize>,

    /// Tokenizer: alphabetic or word [default: alphabetic]
    #[arg(long)]
    pub tokenizer: Option<TokenizerKind>,

    /// Rank every token, not only those containing a letter
    #[arg(long)]
    pub all_words: bool,

    /// Corpus description file inside the corpus directory [default: meta-file.json]
    #[arg(long)]
    pub meta_file: Option<String>,
}

/// Arguments for `burrows attribute`.
#[derive(Args, Debug, Clone)]
pub struct AttributeCommand {
    /// Corpus directory containing the description file
    pub corpus: PathBuf,

    #[command(flatten)]
    /// Model overrides.
    pub model: ModelArgs,

    /// Open-set threshold; decline to attribute when a rival is this close
    #[arg(short = 't', long)]
    pub threshold: Option<f64>,

    /// Answer file [default: <CORPUS>/out.json]
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `burrows train`.
#[derive(Args, Debug, Clone)]
pub struct TrainCommand {
    /// Corpus directory containing the description file
    pub corpus: PathBuf,

    #[command(flatten)]
    /// Model overrides.
    pub model: ModelArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `burrows deltas`.
#[derive(Args, Debug, Clone)]
pub struct DeltasCommand {
    /// Corpus directory containing the description file
    pub corpus: PathBuf,

    #[command(flatten)]
    /// Model overrides.
    pub model: ModelArgs,

    /// Open-set threshold; repeat for several [default: configured thresholds]
    #[arg(short = 't', long = "threshold")]
    pub thresholds: Vec<f64>,

    /// List authors by ascending delta
    #[arg(long)]
    pub sort: bool,

    /// Print one CSV table per text: a row per author, a column per size
    #[arg(long, conflicts_with = "sort")]
    pub csv: bool,
}

/// Arguments for `burrows init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.burrows.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `burrows` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Train on the candidates and attribute every unknown text
    #[command(after_help = "\
EXAMPLES:
  burrows attribute corpus/                 Attribute with configured sizes
  burrows attribute corpus/ -w 100 -w 200   Try only 100 and 200 words
  burrows attribute corpus/ -t 1.05         Refuse close calls
  burrows attribute corpus/ --json          Machine-readable summary")]
    Attribute(AttributeCommand),

    /// Report how well each vocabulary size re-classifies the training texts
    Train(TrainCommand),

    /// Print every author's delta for every unknown text and size
    Deltas(DeltasCommand),

    /// Initialize burrows configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}

impl Commands {
    /// Whether the command reads the merged configuration.
    ///
    /// `init` must work even when an existing config file is invalid.
    pub fn needs_config(&self) -> bool {
        !matches!(self, Self::Init(_))
    }
}

/// Parses CLI arguments, exiting with clap's usage error on failure.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
