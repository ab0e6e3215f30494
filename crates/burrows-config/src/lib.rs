//! Configuration system for burrows.
//!
//! burrows uses TOML configuration files named `.burrows.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.burrows.toml` files found, then loading `~/.burrows.toml` as the global config with lowest
//! precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawCorpusSettings, RawModelSettings, RawOpenSetSettings, RawTrainingSettings,
    parse_config_file, parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for burrows.
///
/// The fully resolved configuration after merging all discovered `.burrows.toml` files
/// according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Tokenization and vocabulary settings.
    pub model: ModelSettings,
    /// Vocabulary size selection settings.
    pub training: TrainingSettings,
    /// Open-set classification settings.
    pub open_set: OpenSetSettings,
    /// Corpus layout settings.
    pub corpus: CorpusSettings,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.burrows.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        Self::load_from_files(&discover_config_files(cwd))
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed = files
            .iter()
            .map(|path| {
                Ok(ParsedConfig {
                    path: path.clone(),
                    config: parse_config_file(path)?,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(merge_configs(&parsed))
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - An empty candidate size list
    /// - Candidate sizes that are not strictly ascending
    /// - Open-set thresholds not greater than 1
    /// - Unknown tokenizer names
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output has the same shape as a `.burrows.toml` file.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            model: &self.model,
            training: &self.training,
            open_set: &self.open_set,
            corpus: &self.corpus,
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// Tokenization and vocabulary settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Tokenizer name (`alphabetic` or `word`).
    pub tokenizer: String,
    /// Only rank tokens containing at least one letter.
    pub real_words: bool,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            tokenizer: String::from("alphabetic"),
            real_words: true,
        }
    }
}

/// Vocabulary size selection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TrainingSettings {
    /// Candidate vocabulary sizes, tried in order.
    pub candidate_sizes: Vec<usize>,
}

impl Default for TrainingSettings {
    fn default() -> Self {
        Self {
            candidate_sizes: vec![150, 200, 250, 300],
        }
    }
}

/// Open-set classification settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OpenSetSettings {
    /// Rejection thresholds; empty means closed-set classification.
    pub thresholds: Vec<f64>,
}

/// Corpus layout settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorpusSettings {
    /// Corpus description file, relative to the corpus directory.
    pub meta_file: String,
    /// Answer file, relative to the corpus directory.
    pub output_file: String,
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            meta_file: String::from("meta-file.json"),
            output_file: String::from("out.json"),
        }
    }
}

/// Borrowed view of the settings sections for TOML output.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Tokenization and vocabulary settings.
    model: &'a ModelSettings,
    /// Vocabulary size selection settings.
    training: &'a TrainingSettings,
    /// Open-set classification settings.
    open_set: &'a OpenSetSettings,
    /// Corpus layout settings.
    corpus: &'a CorpusSettings,
}
