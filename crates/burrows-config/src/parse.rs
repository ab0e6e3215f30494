//! Configuration file parsing.
//!
//! Parses individual `.burrows.toml` files into `RawConfig` structures whose
//! fields stay optional until merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here and ignore parent and global configs.
    pub root: Option<bool>,
    /// Tokenization and vocabulary section.
    pub model: Option<RawModelSettings>,
    /// Training section.
    pub training: Option<RawTrainingSettings>,
    /// Open-set classification section.
    pub open_set: Option<RawOpenSetSettings>,
    /// Corpus layout section.
    pub corpus: Option<RawCorpusSettings>,
}

/// Raw `[model]` settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawModelSettings {
    /// Tokenizer name.
    pub tokenizer: Option<String>,
    /// Whether only tokens containing a letter are ranked.
    pub real_words: Option<bool>,
}

/// Raw `[training]` settings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTrainingSettings {
    /// Candidate vocabulary sizes. Accepts a single number or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub candidate_sizes: Option<Vec<usize>>,
}

/// Raw `[open_set]` settings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOpenSetSettings {
    /// Rejection thresholds. Accepts a single number or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub thresholds: Option<Vec<f64>>,
}

/// Raw `[corpus]` settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCorpusSettings {
    /// Name of the corpus description file.
    pub meta_file: Option<String>,
    /// Name of the answer file.
    pub output_file: Option<String>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
